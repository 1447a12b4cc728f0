pub mod cgf;
pub mod utility;
