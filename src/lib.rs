pub mod http;
pub mod player;
pub mod ui;
pub mod util;
