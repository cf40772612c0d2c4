pub mod keywords;
pub mod region;
pub mod tokenizer;

pub use keywords::{
    activity_table, audience_table, funding_type_table, stage_table, KeywordTable,
};
pub use tokenizer::tokenize;
