//! Test fixtures for newsrank: article builders, the golden article set, and
//! scripted collaborators whose failures and latencies are set per test.

mod builders;
mod collaborators;

pub use builders::{fixed_now, golden_articles, ArticleBuilder};
pub use collaborators::{
    Behavior, CountingAnalyzer, CountingSocialClient, FailingAnalyzer, FailingSocialClient,
    ScriptedSource, UnavailableStore,
};
