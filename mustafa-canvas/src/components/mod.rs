pub(crate) mod primitive;
pub(crate) mod sections;
