pub mod config;
pub mod feed;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod server;
pub mod source;
pub mod translate;

#[cfg(test)]
mod test_utils;

pub mod gtfs_rt {
    include!(concat!(env!("OUT_DIR"), "/transit_realtime.rs"));
}
