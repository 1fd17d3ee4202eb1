//! Backend-neutral resource and resource-view descriptions.
//!
//! These are the structs the interception layer hands to a backend
//! translation crate (e.g. `argus-d3d11`) to build native creation
//! descriptors, and receives back when reconstructing a description from a
//! native object.

use bitflags::bitflags;

use crate::format::Format;

/// Memory locality / CPU access pattern of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryHeap {
    /// Device-local memory, no CPU access.
    GpuOnly,
    /// Upload heap: CPU writes, GPU reads.
    CpuToGpu,
    /// Readback heap: GPU writes, CPU reads.
    GpuToCpu,
    /// Host memory with full CPU access.
    CpuOnly,
}

bitflags! {
    /// Pipeline roles a resource may be used in.
    ///
    /// Unlike native bind masks, this single bitmask also covers copy and
    /// resolve participation; backends split it across several native fields.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ResourceUsage: u32 {
        const RENDER_TARGET = 1 << 0;
        const DEPTH_STENCIL = 1 << 1;
        const SHADER_RESOURCE = 1 << 2;
        const UNORDERED_ACCESS = 1 << 3;
        const INDEX_BUFFER = 1 << 4;
        const VERTEX_BUFFER = 1 << 5;
        const CONSTANT_BUFFER = 1 << 6;
        const COPY_SOURCE = 1 << 7;
        const COPY_DEST = 1 << 8;
        const RESOLVE_SOURCE = 1 << 9;
        const RESOLVE_DEST = 1 << 10;
    }
}

/// Geometry of a buffer resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferDesc {
    /// Size in bytes.
    pub size: u64,
}

/// Geometry of a texture resource, shared by the 1D/2D/3D kinds.
///
/// 1D textures carry `height == 1`; 1D and 3D textures carry `samples == 1`.
/// Backend translators assert these invariants rather than inferring fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    /// Depth for 3D textures, array layer count otherwise.
    pub depth_or_layers: u16,
    /// Mipmap level count.
    pub levels: u16,
    pub format: Format,
    pub samples: u16,
}

impl Default for TextureDesc {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            depth_or_layers: 1,
            levels: 1,
            format: Format::Unknown,
            samples: 1,
        }
    }
}

/// Resource kind tag plus the geometry valid for that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Buffer(BufferDesc),
    Texture1d(TextureDesc),
    Texture2d(TextureDesc),
    Texture3d(TextureDesc),
}

/// Complete description of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceDesc {
    pub ty: ResourceType,
    pub heap: MemoryHeap,
    pub usage: ResourceUsage,
}

/// Element range of a buffer view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferViewDesc {
    /// First element.
    pub offset: u64,
    /// Element count.
    pub size: u64,
}

/// Mip/layer range of a texture view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureViewDesc {
    pub first_level: u32,
    pub levels: u32,
    pub first_layer: u32,
    /// Layer count, or [`TextureViewDesc::ALL_LAYERS`].
    pub layers: u32,
}

impl TextureViewDesc {
    /// Sentinel layer count meaning "all remaining layers (or cubes) from
    /// `first_layer`". Preserved bit-for-bit by backend translators; in
    /// particular it is never scaled when cube-array layer counts are
    /// converted to native cube counts.
    pub const ALL_LAYERS: u32 = 0xFFFF_FFFF;
}

/// View dimension tag plus the range valid for that dimension.
///
/// `Unknown` asks the backend to infer view parameters from the resource;
/// translators leave the native descriptor exactly as the caller
/// pre-initialized it in that case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceViewType {
    #[default]
    Unknown,
    Buffer(BufferViewDesc),
    Texture1d(TextureViewDesc),
    Texture1dArray(TextureViewDesc),
    Texture2d(TextureViewDesc),
    Texture2dArray(TextureViewDesc),
    Texture2dMultisample(TextureViewDesc),
    Texture2dMultisampleArray(TextureViewDesc),
    Texture3d(TextureViewDesc),
    TextureCube(TextureViewDesc),
    TextureCubeArray(TextureViewDesc),
}

/// Complete description of a resource view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResourceViewDesc {
    pub ty: ResourceViewType,
    pub format: Format,
}
