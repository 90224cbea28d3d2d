//! Text extraction for the label-delimited movie descriptions returned by the
//! recommendation service.

pub mod list_literal;
pub mod movie;

pub use list_literal::decode_list;
pub use movie::parse_movie;
