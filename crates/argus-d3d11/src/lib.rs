//! D3D11 descriptor translation for the abstract resource model.
//!
//! [`desc`] models the native D3D11 creation descriptors (buffers, textures,
//! resource views, samplers) as plain Rust data, with the version-tagged
//! view unions expressed as enums. [`convert`] holds the bidirectional,
//! stateless translators between those descriptors and the `argus-api`
//! types.
//!
//! The translators are written for an interception layer: forward
//! conversions overlay abstract state onto caller-pre-initialized native
//! descriptors, reverse conversions coarsen native descriptors back into the
//! abstract model. Lossy edges (plane slices, depth-stencil read-only flags,
//! raw-buffer views) are documented on the functions that drop them.

pub mod convert;
pub mod desc;
