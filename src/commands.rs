pub mod rules;
pub mod validate;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Passed,
    Failed,
}
