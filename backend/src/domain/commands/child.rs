use shared::Gender;

use crate::domain::models::Child;

#[derive(Debug, Clone)]
pub struct CreateChildCommand {
    pub name: String,
    pub birth_date: String,
    pub gender: Gender,
}

/// Creating a child past the tier limit is an expected outcome, not an error
#[derive(Debug, Clone, PartialEq)]
pub enum CreateChildOutcome {
    Created(Child),
    LimitReached { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListChildrenResult {
    pub children: Vec<Child>,
    pub max_children: usize,
}
