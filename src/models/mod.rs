//! Models module for the SDK
//!
//! Defines the value types exchanged with the analyzer and the execution
//! engine. Analysis artifacts (schemas, relationships) are immutable once
//! received; the join configuration is the only mutable model and is owned
//! by [`JoinConfigState`](crate::config::JoinConfigState).

pub mod join;
pub mod relationship;
pub mod requests;
pub mod schema;

pub use join::{JoinCondition, JoinConfig, JoinType, Operator};
pub use relationship::{Relationship, DATA_OVERLAP, POTENTIAL_JOIN, SAME_SCHEMA};
pub use requests::{
    CrossReferenceRequest, JoinRequest, MergeRequest, MergeType, ReferenceType, RequestError,
};
pub use schema::{AnalysisResult, FileSchema, SheetSchema};
