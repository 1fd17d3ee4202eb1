//! Vendor-neutral GPU resource and pipeline-state model.
//!
//! `argus-api` defines the abstract descriptors the interception layer works
//! with: resources, resource views, and fixed-function pipeline state. Each
//! backend crate (e.g. `argus-d3d11`) translates these to and from its native
//! descriptor formats; nothing in this crate knows about any concrete
//! graphics API beyond sharing convenient numbering with one where noted.

pub mod format;
pub mod pipeline;
pub mod resource;
pub mod sampler;

pub use format::Format;
pub use pipeline::{
    BlendFactor, BlendOp, CompareOp, CullMode, FillMode, PrimitiveTopology, StencilOp,
};
pub use resource::{
    BufferDesc, BufferViewDesc, MemoryHeap, ResourceDesc, ResourceType, ResourceUsage,
    ResourceViewDesc, ResourceViewType, TextureDesc, TextureViewDesc,
};
pub use sampler::{Filter, SamplerDesc, TextureAddressMode};
