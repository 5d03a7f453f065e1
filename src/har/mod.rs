//! HAR input model and parser.

mod parser;

pub use parser::{
    parse_har_file, Cookie, Creator, Entry, Har, Header, Log, PostData, Request,
};
