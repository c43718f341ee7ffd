mod browser;

pub use browser::draw;
