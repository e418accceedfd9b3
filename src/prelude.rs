//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::node::{RandVar, Var};
#[doc(no_inline)]
pub use crate::result::{Error, ErrorKind};
#[doc(no_inline)]
pub use crate::sampler::*;
#[doc(no_inline)]
pub use crate::traits::*;
#[doc(no_inline)]
pub use crate::{Model, Trace};
