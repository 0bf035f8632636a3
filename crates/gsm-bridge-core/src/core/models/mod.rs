//! Plain data types shared by the readers, the writers and the conversion workflow.

pub mod record;
