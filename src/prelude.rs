pub use crate::detect::*;
pub use crate::r#move::*;
pub use crate::service::*;
pub use crate::solve::*;
pub use crate::state::*;

#[cfg(test)]
pub use crate::test::*;
