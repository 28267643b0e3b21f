pub mod corpus_check;
pub mod profile_resolve;
