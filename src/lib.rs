pub mod convert;
pub mod error;
pub mod ingest;
pub mod merge;
pub mod model;
pub mod output;
pub mod parsers;
pub mod prefix;
