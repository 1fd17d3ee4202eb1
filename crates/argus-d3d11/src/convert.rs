//! Pure conversions between the abstract resource model and the D3D11
//! descriptor models.
//!
//! Every function here is a stateless mapping over caller-owned structs.
//! Contract violations (mismatched kind tags, values that do not fit a
//! narrower native field, enum values this backend cannot express) panic;
//! nothing returns an error value. Fields that exist on one side only are
//! dropped deterministically and are called out on the affected function.
//!
//! Forward converters take `&mut` output descriptors and write only the
//! fields the abstract model covers, so callers can pre-initialize a native
//! descriptor (typically with the one read back from a live object) and
//! overlay the abstract state onto it.

use argus_api as api;

use crate::desc::{
    BindFlags, Blend, BlendOp, BufferDesc, BufferUavFlags, ComparisonFunc, CpuAccessFlags,
    CullMode, DepthStencilViewDesc, DsvDimension, FillMode, Filter, PrimitiveTopology,
    RenderTargetViewDesc, RenderTargetViewDesc1, Rtv1Dimension, RtvDimension, SamplerDesc,
    ShaderResourceViewDesc, ShaderResourceViewDesc1, Srv1Dimension, SrvDimension, StencilOp,
    TextureAddressMode, Texture1dDesc, Texture2dDesc, Texture3dDesc, UnorderedAccessViewDesc,
    UnorderedAccessViewDesc1, Uav1Dimension, UavDimension, Usage,
};

/// Decodes a raw DXGI format, falling back to `Unknown` for values outside
/// the abstract format table (reserved and video format ranges).
fn format_from_dxgi(value: u32) -> api::Format {
    api::Format::from_u32(value).unwrap_or(api::Format::Unknown)
}

/* ------------------------------ Enum codecs ------------------------------ */

/// The abstract blend ops parallel `D3D11_BLEND_OP` one unit lower.
pub fn blend_op_to_d3d(value: api::BlendOp) -> BlendOp {
    BlendOp::from_u32(value as u32 + 1).expect("abstract blend op parallels D3D11_BLEND_OP")
}

/// Maps an abstract blend factor onto `D3D11_BLEND`.
///
/// This map is surjective: D3D11 tracks a single blend constant, so
/// `ConstantColor`/`ConstantAlpha` collapse onto [`Blend::BlendFactor`] and
/// their inverses onto [`Blend::InvBlendFactor`]. No reverse conversion is
/// offered; callers that need the abstract value back must keep it alongside
/// the native one.
pub fn blend_factor_to_d3d(value: api::BlendFactor) -> Blend {
    match value {
        api::BlendFactor::Zero => Blend::Zero,
        api::BlendFactor::One => Blend::One,
        api::BlendFactor::SrcColor => Blend::SrcColor,
        api::BlendFactor::InvSrcColor => Blend::InvSrcColor,
        api::BlendFactor::DstColor => Blend::DestColor,
        api::BlendFactor::InvDstColor => Blend::InvDestColor,
        api::BlendFactor::SrcAlpha => Blend::SrcAlpha,
        api::BlendFactor::InvSrcAlpha => Blend::InvSrcAlpha,
        api::BlendFactor::DstAlpha => Blend::DestAlpha,
        api::BlendFactor::InvDstAlpha => Blend::InvDestAlpha,
        api::BlendFactor::ConstantColor | api::BlendFactor::ConstantAlpha => Blend::BlendFactor,
        api::BlendFactor::InvConstantColor | api::BlendFactor::InvConstantAlpha => {
            Blend::InvBlendFactor
        }
        api::BlendFactor::SrcAlphaSat => Blend::SrcAlphaSat,
        api::BlendFactor::Src1Color => Blend::Src1Color,
        api::BlendFactor::InvSrc1Color => Blend::InvSrc1Color,
        api::BlendFactor::Src1Alpha => Blend::Src1Alpha,
        api::BlendFactor::InvSrc1Alpha => Blend::InvSrc1Alpha,
    }
}

/// Panics on `FillMode::Point`: D3D11 has no point fill mode, and silently
/// substituting one would corrupt the rasterizer state downstream.
pub fn fill_mode_to_d3d(value: api::FillMode) -> FillMode {
    match value {
        api::FillMode::Solid => FillMode::Solid,
        api::FillMode::Wireframe => FillMode::Wireframe,
        api::FillMode::Point => panic!("D3D11 has no point fill mode"),
    }
}

/// The abstract cull modes parallel `D3D11_CULL_MODE` one unit lower.
/// Panics on `FrontAndBack`, which D3D11 cannot express.
pub fn cull_mode_to_d3d(value: api::CullMode) -> CullMode {
    assert!(
        value != api::CullMode::FrontAndBack,
        "D3D11 has no front-and-back cull mode"
    );
    CullMode::from_u32(value as u32 + 1).expect("abstract cull mode parallels D3D11_CULL_MODE")
}

/// The abstract compare ops parallel `D3D11_COMPARISON_FUNC` one unit lower.
pub fn compare_op_to_d3d(value: api::CompareOp) -> ComparisonFunc {
    ComparisonFunc::from_u32(value as u32 + 1)
        .expect("abstract compare op parallels D3D11_COMPARISON_FUNC")
}

/// The abstract stencil ops parallel `D3D11_STENCIL_OP` one unit lower.
pub fn stencil_op_to_d3d(value: api::StencilOp) -> StencilOp {
    StencilOp::from_u32(value as u32 + 1).expect("abstract stencil op parallels D3D11_STENCIL_OP")
}

/// Panics on `TriangleFan`, which D3D10+ removed.
pub fn primitive_topology_to_d3d(value: api::PrimitiveTopology) -> PrimitiveTopology {
    match value {
        api::PrimitiveTopology::Undefined => PrimitiveTopology::Undefined,
        api::PrimitiveTopology::PointList => PrimitiveTopology::PointList,
        api::PrimitiveTopology::LineList => PrimitiveTopology::LineList,
        api::PrimitiveTopology::LineStrip => PrimitiveTopology::LineStrip,
        api::PrimitiveTopology::TriangleList => PrimitiveTopology::TriangleList,
        api::PrimitiveTopology::TriangleStrip => PrimitiveTopology::TriangleStrip,
        api::PrimitiveTopology::TriangleFan => panic!("D3D11 has no triangle fan topology"),
        api::PrimitiveTopology::LineListAdj => PrimitiveTopology::LineListAdj,
        api::PrimitiveTopology::LineStripAdj => PrimitiveTopology::LineStripAdj,
        api::PrimitiveTopology::TriangleListAdj => PrimitiveTopology::TriangleListAdj,
        api::PrimitiveTopology::TriangleStripAdj => PrimitiveTopology::TriangleStripAdj,
    }
}

/// Abstract filters share the D3D11 filter encoding.
pub fn filter_to_d3d(value: api::Filter) -> Filter {
    Filter::from_u32(value as u32).expect("abstract filters share the D3D11 filter encoding")
}

pub fn filter_from_d3d(value: Filter) -> api::Filter {
    api::Filter::from_u32(value as u32).expect("abstract filters share the D3D11 filter encoding")
}

/// Abstract address modes share the D3D11 numbering.
pub fn address_mode_to_d3d(value: api::TextureAddressMode) -> TextureAddressMode {
    TextureAddressMode::from_u32(value as u32)
        .expect("abstract address modes share the D3D11 numbering")
}

pub fn address_mode_from_d3d(value: TextureAddressMode) -> api::TextureAddressMode {
    api::TextureAddressMode::from_u32(value as u32)
        .expect("abstract address modes share the D3D11 numbering")
}

/* --------------------------- Heap/usage codecs --------------------------- */

/// Splits an abstract heap into the native usage enum plus CPU access bits.
/// Access bits are OR'd into the caller's mask; existing bits are kept.
pub fn memory_heap_to_d3d_usage(
    heap: api::MemoryHeap,
    usage: &mut Usage,
    cpu_access_flags: &mut CpuAccessFlags,
) {
    match heap {
        api::MemoryHeap::GpuOnly => *usage = Usage::Default,
        api::MemoryHeap::CpuToGpu => {
            *usage = Usage::Dynamic;
            *cpu_access_flags |= CpuAccessFlags::WRITE;
        }
        api::MemoryHeap::GpuToCpu => {
            *usage = Usage::Staging;
            *cpu_access_flags |= CpuAccessFlags::READ;
        }
        api::MemoryHeap::CpuOnly => {
            *usage = Usage::Staging;
            *cpu_access_flags |= CpuAccessFlags::READ | CpuAccessFlags::WRITE;
        }
    }
}

/// Coarsens the native usage back to an abstract heap. `Default` and
/// `Immutable` both map to `GpuOnly` (the abstract model has no immutable
/// concept), and `Staging` maps to `GpuToCpu` (never `CpuOnly`).
pub fn d3d_usage_to_memory_heap(usage: Usage) -> api::MemoryHeap {
    match usage {
        Usage::Default | Usage::Immutable => api::MemoryHeap::GpuOnly,
        Usage::Dynamic => api::MemoryHeap::CpuToGpu,
        Usage::Staging => api::MemoryHeap::GpuToCpu,
    }
}

/// Maps the seven bind-flag-backed usage bits onto the native bind flags.
/// Absent bits clear the corresponding flag: the native mask may be reused
/// from a pre-initialized descriptor. Flags outside the mapped set (stream
/// output, video) are left alone.
pub fn resource_usage_to_bind_flags(usage: api::ResourceUsage, bind_flags: &mut BindFlags) {
    bind_flags.set(
        BindFlags::RENDER_TARGET,
        usage.contains(api::ResourceUsage::RENDER_TARGET),
    );
    bind_flags.set(
        BindFlags::DEPTH_STENCIL,
        usage.contains(api::ResourceUsage::DEPTH_STENCIL),
    );
    bind_flags.set(
        BindFlags::SHADER_RESOURCE,
        usage.contains(api::ResourceUsage::SHADER_RESOURCE),
    );
    bind_flags.set(
        BindFlags::UNORDERED_ACCESS,
        usage.contains(api::ResourceUsage::UNORDERED_ACCESS),
    );
    bind_flags.set(
        BindFlags::INDEX_BUFFER,
        usage.contains(api::ResourceUsage::INDEX_BUFFER),
    );
    bind_flags.set(
        BindFlags::VERTEX_BUFFER,
        usage.contains(api::ResourceUsage::VERTEX_BUFFER),
    );
    bind_flags.set(
        BindFlags::CONSTANT_BUFFER,
        usage.contains(api::ResourceUsage::CONSTANT_BUFFER),
    );
}

/// Maps native bind flags back to abstract usage bits.
///
/// Not the inverse of [`resource_usage_to_bind_flags`]: D3D11 resources are
/// copyable regardless of bind flags, so `COPY_SOURCE | COPY_DEST` is always
/// OR'd in.
pub fn bind_flags_to_resource_usage(bind_flags: BindFlags) -> api::ResourceUsage {
    let mut usage = api::ResourceUsage::COPY_DEST | api::ResourceUsage::COPY_SOURCE;

    if bind_flags.contains(BindFlags::RENDER_TARGET) {
        usage |= api::ResourceUsage::RENDER_TARGET;
    }
    if bind_flags.contains(BindFlags::DEPTH_STENCIL) {
        usage |= api::ResourceUsage::DEPTH_STENCIL;
    }
    if bind_flags.contains(BindFlags::SHADER_RESOURCE) {
        usage |= api::ResourceUsage::SHADER_RESOURCE;
    }
    if bind_flags.contains(BindFlags::UNORDERED_ACCESS) {
        usage |= api::ResourceUsage::UNORDERED_ACCESS;
    }
    if bind_flags.contains(BindFlags::INDEX_BUFFER) {
        usage |= api::ResourceUsage::INDEX_BUFFER;
    }
    if bind_flags.contains(BindFlags::VERTEX_BUFFER) {
        usage |= api::ResourceUsage::VERTEX_BUFFER;
    }
    if bind_flags.contains(BindFlags::CONSTANT_BUFFER) {
        usage |= api::ResourceUsage::CONSTANT_BUFFER;
    }
    usage
}

/* ---------------------- Resource descriptor translators ------------------- */

pub fn resource_to_buffer_desc(desc: &api::ResourceDesc, out: &mut BufferDesc) {
    let api::ResourceType::Buffer(buffer) = desc.ty else {
        panic!("buffer descriptor conversion requires a buffer resource");
    };
    assert!(
        buffer.size <= u64::from(u32::MAX),
        "buffer size exceeds the 32-bit D3D11 byte width"
    );
    out.byte_width = buffer.size as u32;
    memory_heap_to_d3d_usage(desc.heap, &mut out.usage, &mut out.cpu_access_flags);
    resource_usage_to_bind_flags(desc.usage, &mut out.bind_flags);
}

pub fn resource_from_buffer_desc(desc: &BufferDesc) -> api::ResourceDesc {
    api::ResourceDesc {
        ty: api::ResourceType::Buffer(api::BufferDesc {
            size: u64::from(desc.byte_width),
        }),
        heap: d3d_usage_to_memory_heap(desc.usage),
        usage: bind_flags_to_resource_usage(desc.bind_flags),
    }
}

pub fn resource_to_texture1d_desc(desc: &api::ResourceDesc, out: &mut Texture1dDesc) {
    let api::ResourceType::Texture1d(texture) = desc.ty else {
        panic!("1D texture descriptor conversion requires a 1D texture resource");
    };
    assert_eq!(texture.height, 1, "1D textures have unit height");
    assert_eq!(texture.samples, 1, "1D textures are single-sampled");
    out.width = texture.width;
    out.mip_levels = u32::from(texture.levels);
    out.array_size = u32::from(texture.depth_or_layers);
    out.format = texture.format as u32;
    memory_heap_to_d3d_usage(desc.heap, &mut out.usage, &mut out.cpu_access_flags);
    resource_usage_to_bind_flags(desc.usage, &mut out.bind_flags);
}

pub fn resource_from_texture1d_desc(desc: &Texture1dDesc) -> api::ResourceDesc {
    assert!(
        desc.array_size <= u32::from(u16::MAX),
        "array size exceeds the abstract 16-bit layer count"
    );
    assert!(
        desc.mip_levels <= u32::from(u16::MAX),
        "mip count exceeds the abstract 16-bit level count"
    );
    api::ResourceDesc {
        ty: api::ResourceType::Texture1d(api::TextureDesc {
            width: desc.width,
            height: 1,
            depth_or_layers: desc.array_size as u16,
            levels: desc.mip_levels as u16,
            format: format_from_dxgi(desc.format),
            samples: 1,
        }),
        heap: d3d_usage_to_memory_heap(desc.usage),
        usage: bind_flags_to_resource_usage(desc.bind_flags),
    }
}

pub fn resource_to_texture2d_desc(desc: &api::ResourceDesc, out: &mut Texture2dDesc) {
    let api::ResourceType::Texture2d(texture) = desc.ty else {
        panic!("2D texture descriptor conversion requires a 2D texture resource");
    };
    out.width = texture.width;
    out.height = texture.height;
    out.mip_levels = u32::from(texture.levels);
    out.array_size = u32::from(texture.depth_or_layers);
    out.format = texture.format as u32;
    out.sample_desc.count = u32::from(texture.samples);
    memory_heap_to_d3d_usage(desc.heap, &mut out.usage, &mut out.cpu_access_flags);
    resource_usage_to_bind_flags(desc.usage, &mut out.bind_flags);
}

/// Besides the bind-flag-backed bits, the reverse conversion derives a
/// resolve bit from the sample count: multisampled 2D textures are assumed
/// resolve sources, single-sampled ones resolve destinations. The forward
/// direction has no counterpart for these bits.
pub fn resource_from_texture2d_desc(desc: &Texture2dDesc) -> api::ResourceDesc {
    assert!(
        desc.array_size <= u32::from(u16::MAX),
        "array size exceeds the abstract 16-bit layer count"
    );
    assert!(
        desc.mip_levels <= u32::from(u16::MAX),
        "mip count exceeds the abstract 16-bit level count"
    );
    assert!(
        desc.sample_desc.count <= u32::from(u16::MAX),
        "sample count exceeds the abstract 16-bit sample count"
    );
    let samples = desc.sample_desc.count as u16;
    let mut usage = bind_flags_to_resource_usage(desc.bind_flags);
    usage |= if samples > 1 {
        api::ResourceUsage::RESOLVE_SOURCE
    } else {
        api::ResourceUsage::RESOLVE_DEST
    };
    api::ResourceDesc {
        ty: api::ResourceType::Texture2d(api::TextureDesc {
            width: desc.width,
            height: desc.height,
            depth_or_layers: desc.array_size as u16,
            levels: desc.mip_levels as u16,
            format: format_from_dxgi(desc.format),
            samples,
        }),
        heap: d3d_usage_to_memory_heap(desc.usage),
        usage,
    }
}

pub fn resource_to_texture3d_desc(desc: &api::ResourceDesc, out: &mut Texture3dDesc) {
    let api::ResourceType::Texture3d(texture) = desc.ty else {
        panic!("3D texture descriptor conversion requires a 3D texture resource");
    };
    assert_eq!(texture.samples, 1, "3D textures are single-sampled");
    out.width = texture.width;
    out.height = texture.height;
    out.depth = u32::from(texture.depth_or_layers);
    out.mip_levels = u32::from(texture.levels);
    out.format = texture.format as u32;
    memory_heap_to_d3d_usage(desc.heap, &mut out.usage, &mut out.cpu_access_flags);
    resource_usage_to_bind_flags(desc.usage, &mut out.bind_flags);
}

pub fn resource_from_texture3d_desc(desc: &Texture3dDesc) -> api::ResourceDesc {
    assert!(
        desc.depth <= u32::from(u16::MAX),
        "depth exceeds the abstract 16-bit depth count"
    );
    assert!(
        desc.mip_levels <= u32::from(u16::MAX),
        "mip count exceeds the abstract 16-bit level count"
    );
    api::ResourceDesc {
        ty: api::ResourceType::Texture3d(api::TextureDesc {
            width: desc.width,
            height: desc.height,
            depth_or_layers: desc.depth as u16,
            levels: desc.mip_levels as u16,
            format: format_from_dxgi(desc.format),
            samples: 1,
        }),
        heap: d3d_usage_to_memory_heap(desc.usage),
        usage: bind_flags_to_resource_usage(desc.bind_flags),
    }
}

/* ----------------------- Sampler descriptor translators ------------------- */

/// Comparison sampling and border color have no abstract representation;
/// the forward conversion fixes them to `Always` and transparent black.
pub fn sampler_to_d3d_desc(desc: &api::SamplerDesc, out: &mut SamplerDesc) {
    out.filter = filter_to_d3d(desc.filter);
    out.address_u = address_mode_to_d3d(desc.address_u);
    out.address_v = address_mode_to_d3d(desc.address_v);
    out.address_w = address_mode_to_d3d(desc.address_w);
    out.mip_lod_bias = desc.mip_lod_bias;
    out.max_anisotropy = desc.max_anisotropy as u32;
    out.comparison_func = ComparisonFunc::Always;
    out.border_color = [0.0; 4];
    out.min_lod = desc.min_lod;
    out.max_lod = desc.max_lod;
}

/// Drops `comparison_func` and `border_color` (no abstract representation).
pub fn sampler_from_d3d_desc(desc: &SamplerDesc) -> api::SamplerDesc {
    api::SamplerDesc {
        filter: filter_from_d3d(desc.filter),
        address_u: address_mode_from_d3d(desc.address_u),
        address_v: address_mode_from_d3d(desc.address_v),
        address_w: address_mode_from_d3d(desc.address_w),
        mip_lod_bias: desc.mip_lod_bias,
        max_anisotropy: desc.max_anisotropy as f32,
        min_lod: desc.min_lod,
        max_lod: desc.max_lod,
    }
}

/* --------------------- Resource-view descriptor translators --------------- */

/// Builds a depth-stencil view descriptor. `Unknown` writes the format and
/// leaves the dimension as the caller pre-initialized it; `flags` is never
/// touched (no abstract counterpart).
pub fn view_to_dsv_desc(desc: &api::ResourceViewDesc, out: &mut DepthStencilViewDesc) {
    out.format = desc.format as u32;
    match desc.ty {
        api::ResourceViewType::Unknown => {}
        api::ResourceViewType::Texture1d(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture1d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture1dArray(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture1dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2d(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture2d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture2dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2dMultisample(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture2dMs;
        }
        api::ResourceViewType::Texture2dMultisampleArray(t) => {
            assert_eq!(t.levels, 1, "depth-stencil views cover exactly one mip level");
            out.dimension = DsvDimension::Texture2dMsArray {
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Buffer(_) => {
            panic!("depth-stencil views cannot target buffers")
        }
        api::ResourceViewType::Texture3d(_)
        | api::ResourceViewType::TextureCube(_)
        | api::ResourceViewType::TextureCubeArray(_) => {
            panic!("view dimension not supported for depth-stencil views")
        }
    }
}

/// Reads back a depth-stencil view descriptor. `flags` is dropped.
pub fn view_from_dsv_desc(desc: &DepthStencilViewDesc) -> api::ResourceViewDesc {
    let ty = match desc.dimension {
        DsvDimension::Unknown => api::ResourceViewType::Unknown,
        DsvDimension::Texture1d { mip_slice } => {
            api::ResourceViewType::Texture1d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        DsvDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture1dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        DsvDimension::Texture2d { mip_slice } => {
            api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        DsvDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        DsvDimension::Texture2dMs => {
            api::ResourceViewType::Texture2dMultisample(api::TextureViewDesc {
                first_level: 0,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        DsvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dMultisampleArray(api::TextureViewDesc {
            first_level: 0,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
    };
    api::ResourceViewDesc {
        ty,
        format: format_from_dxgi(desc.format),
    }
}

/// Builds a render-target view descriptor. `Unknown` writes the format and
/// leaves the dimension as the caller pre-initialized it.
pub fn view_to_rtv_desc(desc: &api::ResourceViewDesc, out: &mut RenderTargetViewDesc) {
    out.format = desc.format as u32;
    match desc.ty {
        api::ResourceViewType::Unknown => {}
        api::ResourceViewType::Texture1d(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture1d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture1dArray(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture1dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2d(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture2d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture2dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2dMultisample(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture2dMs;
        }
        api::ResourceViewType::Texture2dMultisampleArray(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture2dMsArray {
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture3d(t) => {
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            out.dimension = RtvDimension::Texture3d {
                mip_slice: t.first_level,
                first_w_slice: t.first_layer,
                w_size: t.layers,
            };
        }
        api::ResourceViewType::Buffer(_) => {
            panic!("render-target views cannot target buffers")
        }
        api::ResourceViewType::TextureCube(_) | api::ResourceViewType::TextureCubeArray(_) => {
            panic!("view dimension not supported for render-target views")
        }
    }
}

pub fn view_from_rtv_desc(desc: &RenderTargetViewDesc) -> api::ResourceViewDesc {
    let ty = match desc.dimension {
        RtvDimension::Unknown => api::ResourceViewType::Unknown,
        RtvDimension::Texture1d { mip_slice } => {
            api::ResourceViewType::Texture1d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        RtvDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture1dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        RtvDimension::Texture2d { mip_slice } => {
            api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        RtvDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        RtvDimension::Texture2dMs => {
            api::ResourceViewType::Texture2dMultisample(api::TextureViewDesc {
                first_level: 0,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        RtvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dMultisampleArray(api::TextureViewDesc {
            first_level: 0,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        RtvDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => api::ResourceViewType::Texture3d(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_w_slice,
            layers: w_size,
        }),
    };
    api::ResourceViewDesc {
        ty,
        format: format_from_dxgi(desc.format),
    }
}

fn rtv1_dimension_to_base(dimension: Rtv1Dimension) -> RtvDimension {
    match dimension {
        Rtv1Dimension::Unknown => RtvDimension::Unknown,
        Rtv1Dimension::Texture1d { mip_slice } => RtvDimension::Texture1d { mip_slice },
        Rtv1Dimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => RtvDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        // Plane slice is versioned-only state and does not survive the
        // structural down-conversion.
        Rtv1Dimension::Texture2d { mip_slice, .. } => RtvDimension::Texture2d { mip_slice },
        Rtv1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            ..
        } => RtvDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        Rtv1Dimension::Texture2dMs => RtvDimension::Texture2dMs,
        Rtv1Dimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => RtvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        },
        Rtv1Dimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => RtvDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        },
    }
}

fn rtv_dimension_to_v1(dimension: RtvDimension) -> Rtv1Dimension {
    match dimension {
        RtvDimension::Unknown => Rtv1Dimension::Unknown,
        RtvDimension::Texture1d { mip_slice } => Rtv1Dimension::Texture1d { mip_slice },
        RtvDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => Rtv1Dimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        RtvDimension::Texture2d { mip_slice } => Rtv1Dimension::Texture2d {
            mip_slice,
            plane_slice: 0,
        },
        RtvDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => Rtv1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            plane_slice: 0,
        },
        RtvDimension::Texture2dMs => Rtv1Dimension::Texture2dMs,
        RtvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => Rtv1Dimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        },
        RtvDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => Rtv1Dimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        },
    }
}

/// Builds a revision-1 render-target view descriptor. `Unknown` writes the
/// format and leaves the dimension as the caller pre-initialized it. The 2D
/// and 2D-array dimensions are populated directly, keeping any
/// pre-initialized `plane_slice` (the abstract model cannot express it);
/// every other dimension goes through the base translator.
pub fn view_to_rtv1_desc(desc: &api::ResourceViewDesc, out: &mut RenderTargetViewDesc1) {
    match desc.ty {
        // Pass-through must not round-trip the dimension through the base
        // enum, which cannot carry the plane slice.
        api::ResourceViewType::Unknown => {
            out.format = desc.format as u32;
        }
        api::ResourceViewType::Texture2d(t) => {
            out.format = desc.format as u32;
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            let plane_slice = match out.dimension {
                Rtv1Dimension::Texture2d { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Rtv1Dimension::Texture2d {
                mip_slice: t.first_level,
                plane_slice,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            out.format = desc.format as u32;
            assert_eq!(t.levels, 1, "render-target views cover exactly one mip level");
            let plane_slice = match out.dimension {
                Rtv1Dimension::Texture2dArray { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Rtv1Dimension::Texture2dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
                plane_slice,
            };
        }
        _ => {
            let mut base = RenderTargetViewDesc {
                format: out.format,
                dimension: rtv1_dimension_to_base(out.dimension),
            };
            view_to_rtv_desc(desc, &mut base);
            out.format = base.format;
            out.dimension = rtv_dimension_to_v1(base.dimension);
        }
    }
}

/// Reads back a revision-1 render-target view descriptor. `plane_slice` is
/// dropped.
pub fn view_from_rtv1_desc(desc: &RenderTargetViewDesc1) -> api::ResourceViewDesc {
    match desc.dimension {
        Rtv1Dimension::Texture2d { mip_slice, .. } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            }),
            format: format_from_dxgi(desc.format),
        },
        Rtv1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            ..
        } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: first_array_slice,
                layers: array_size,
            }),
            format: format_from_dxgi(desc.format),
        },
        _ => view_from_rtv_desc(&RenderTargetViewDesc {
            format: desc.format,
            dimension: rtv1_dimension_to_base(desc.dimension),
        }),
    }
}

/// Builds a shader-resource view descriptor. `Unknown` writes the format and
/// leaves the dimension as the caller pre-initialized it. The `BufferEx`
/// dimension is never produced (the abstract model has no raw-buffer view).
pub fn view_to_srv_desc(desc: &api::ResourceViewDesc, out: &mut ShaderResourceViewDesc) {
    out.format = desc.format as u32;
    match desc.ty {
        api::ResourceViewType::Unknown => {}
        api::ResourceViewType::Buffer(b) => {
            assert!(
                b.offset <= u64::from(u32::MAX),
                "buffer view offset exceeds the 32-bit element index"
            );
            assert!(
                b.size <= u64::from(u32::MAX),
                "buffer view size exceeds the 32-bit element count"
            );
            out.dimension = SrvDimension::Buffer {
                first_element: b.offset as u32,
                num_elements: b.size as u32,
            };
        }
        api::ResourceViewType::Texture1d(t) => {
            out.dimension = SrvDimension::Texture1d {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
            };
        }
        api::ResourceViewType::Texture1dArray(t) => {
            out.dimension = SrvDimension::Texture1dArray {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2d(t) => {
            out.dimension = SrvDimension::Texture2d {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            out.dimension = SrvDimension::Texture2dArray {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2dMultisample(_) => {
            out.dimension = SrvDimension::Texture2dMs;
        }
        api::ResourceViewType::Texture2dMultisampleArray(t) => {
            out.dimension = SrvDimension::Texture2dMsArray {
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture3d(t) => {
            out.dimension = SrvDimension::Texture3d {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
            };
        }
        api::ResourceViewType::TextureCube(t) => {
            out.dimension = SrvDimension::TextureCube {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
            };
        }
        api::ResourceViewType::TextureCubeArray(t) => {
            out.dimension = SrvDimension::TextureCubeArray {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
                first_2d_array_face: t.first_layer,
                // The all-layers sentinel passes through unscaled; a real
                // layer count is six layers per cube.
                num_cubes: if t.layers == api::TextureViewDesc::ALL_LAYERS {
                    api::TextureViewDesc::ALL_LAYERS
                } else {
                    t.layers / 6
                },
            };
        }
    }
}

/// Reads back a shader-resource view descriptor.
///
/// `BufferEx` maps to `Unknown` so a round trip does not demote a raw-buffer
/// view to a plain buffer view; its element range and flags are dropped.
pub fn view_from_srv_desc(desc: &ShaderResourceViewDesc) -> api::ResourceViewDesc {
    let ty = match desc.dimension {
        SrvDimension::Unknown | SrvDimension::BufferEx { .. } => api::ResourceViewType::Unknown,
        SrvDimension::Buffer {
            first_element,
            num_elements,
        } => api::ResourceViewType::Buffer(api::BufferViewDesc {
            offset: u64::from(first_element),
            size: u64::from(num_elements),
        }),
        SrvDimension::Texture1d {
            most_detailed_mip,
            mip_levels,
        } => api::ResourceViewType::Texture1d(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: 0,
            layers: 0,
        }),
        SrvDimension::Texture1dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture1dArray(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        SrvDimension::Texture2d {
            most_detailed_mip,
            mip_levels,
        } => api::ResourceViewType::Texture2d(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: 0,
            layers: 0,
        }),
        SrvDimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        SrvDimension::Texture2dMs => {
            api::ResourceViewType::Texture2dMultisample(api::TextureViewDesc {
                first_level: 0,
                levels: 0,
                first_layer: 0,
                layers: 0,
            })
        }
        SrvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dMultisampleArray(api::TextureViewDesc {
            first_level: 0,
            levels: 0,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        SrvDimension::Texture3d {
            most_detailed_mip,
            mip_levels,
        } => api::ResourceViewType::Texture3d(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: 0,
            layers: 0,
        }),
        SrvDimension::TextureCube {
            most_detailed_mip,
            mip_levels,
        } => api::ResourceViewType::TextureCube(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: 0,
            layers: 0,
        }),
        SrvDimension::TextureCubeArray {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        } => api::ResourceViewType::TextureCubeArray(api::TextureViewDesc {
            first_level: most_detailed_mip,
            levels: mip_levels,
            first_layer: first_2d_array_face,
            layers: if num_cubes == api::TextureViewDesc::ALL_LAYERS {
                api::TextureViewDesc::ALL_LAYERS
            } else {
                num_cubes * 6
            },
        }),
    };
    api::ResourceViewDesc {
        ty,
        format: format_from_dxgi(desc.format),
    }
}

fn srv1_dimension_to_base(dimension: Srv1Dimension) -> SrvDimension {
    match dimension {
        Srv1Dimension::Unknown => SrvDimension::Unknown,
        Srv1Dimension::Buffer {
            first_element,
            num_elements,
        } => SrvDimension::Buffer {
            first_element,
            num_elements,
        },
        Srv1Dimension::Texture1d {
            most_detailed_mip,
            mip_levels,
        } => SrvDimension::Texture1d {
            most_detailed_mip,
            mip_levels,
        },
        Srv1Dimension::Texture1dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        } => SrvDimension::Texture1dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        },
        Srv1Dimension::Texture2d {
            most_detailed_mip,
            mip_levels,
            ..
        } => SrvDimension::Texture2d {
            most_detailed_mip,
            mip_levels,
        },
        Srv1Dimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
            ..
        } => SrvDimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        },
        Srv1Dimension::Texture2dMs => SrvDimension::Texture2dMs,
        Srv1Dimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => SrvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        },
        Srv1Dimension::Texture3d {
            most_detailed_mip,
            mip_levels,
        } => SrvDimension::Texture3d {
            most_detailed_mip,
            mip_levels,
        },
        Srv1Dimension::TextureCube {
            most_detailed_mip,
            mip_levels,
        } => SrvDimension::TextureCube {
            most_detailed_mip,
            mip_levels,
        },
        Srv1Dimension::TextureCubeArray {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        } => SrvDimension::TextureCubeArray {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        },
        Srv1Dimension::BufferEx {
            first_element,
            num_elements,
            flags,
        } => SrvDimension::BufferEx {
            first_element,
            num_elements,
            flags,
        },
    }
}

fn srv_dimension_to_v1(dimension: SrvDimension) -> Srv1Dimension {
    match dimension {
        SrvDimension::Unknown => Srv1Dimension::Unknown,
        SrvDimension::Buffer {
            first_element,
            num_elements,
        } => Srv1Dimension::Buffer {
            first_element,
            num_elements,
        },
        SrvDimension::Texture1d {
            most_detailed_mip,
            mip_levels,
        } => Srv1Dimension::Texture1d {
            most_detailed_mip,
            mip_levels,
        },
        SrvDimension::Texture1dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        } => Srv1Dimension::Texture1dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        },
        SrvDimension::Texture2d {
            most_detailed_mip,
            mip_levels,
        } => Srv1Dimension::Texture2d {
            most_detailed_mip,
            mip_levels,
            plane_slice: 0,
        },
        SrvDimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
        } => Srv1Dimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
            plane_slice: 0,
        },
        SrvDimension::Texture2dMs => Srv1Dimension::Texture2dMs,
        SrvDimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        } => Srv1Dimension::Texture2dMsArray {
            first_array_slice,
            array_size,
        },
        SrvDimension::Texture3d {
            most_detailed_mip,
            mip_levels,
        } => Srv1Dimension::Texture3d {
            most_detailed_mip,
            mip_levels,
        },
        SrvDimension::TextureCube {
            most_detailed_mip,
            mip_levels,
        } => Srv1Dimension::TextureCube {
            most_detailed_mip,
            mip_levels,
        },
        SrvDimension::TextureCubeArray {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        } => Srv1Dimension::TextureCubeArray {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        },
        SrvDimension::BufferEx {
            first_element,
            num_elements,
            flags,
        } => Srv1Dimension::BufferEx {
            first_element,
            num_elements,
            flags,
        },
    }
}

/// Builds a revision-1 shader-resource view descriptor. `Unknown` writes the
/// format and leaves the dimension as the caller pre-initialized it. The 2D
/// and 2D-array dimensions are populated directly, keeping any
/// pre-initialized `plane_slice`; every other dimension goes through the
/// base translator.
pub fn view_to_srv1_desc(desc: &api::ResourceViewDesc, out: &mut ShaderResourceViewDesc1) {
    match desc.ty {
        // Pass-through must not round-trip the dimension through the base
        // enum, which cannot carry the plane slice.
        api::ResourceViewType::Unknown => {
            out.format = desc.format as u32;
        }
        api::ResourceViewType::Texture2d(t) => {
            out.format = desc.format as u32;
            let plane_slice = match out.dimension {
                Srv1Dimension::Texture2d { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Srv1Dimension::Texture2d {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
                plane_slice,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            out.format = desc.format as u32;
            let plane_slice = match out.dimension {
                Srv1Dimension::Texture2dArray { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Srv1Dimension::Texture2dArray {
                most_detailed_mip: t.first_level,
                mip_levels: t.levels,
                first_array_slice: t.first_layer,
                array_size: t.layers,
                plane_slice,
            };
        }
        _ => {
            let mut base = ShaderResourceViewDesc {
                format: out.format,
                dimension: srv1_dimension_to_base(out.dimension),
            };
            view_to_srv_desc(desc, &mut base);
            out.format = base.format;
            out.dimension = srv_dimension_to_v1(base.dimension);
        }
    }
}

/// Reads back a revision-1 shader-resource view descriptor. `plane_slice`
/// is dropped.
pub fn view_from_srv1_desc(desc: &ShaderResourceViewDesc1) -> api::ResourceViewDesc {
    match desc.dimension {
        Srv1Dimension::Texture2d {
            most_detailed_mip,
            mip_levels,
            ..
        } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: most_detailed_mip,
                levels: mip_levels,
                first_layer: 0,
                layers: 0,
            }),
            format: format_from_dxgi(desc.format),
        },
        Srv1Dimension::Texture2dArray {
            most_detailed_mip,
            mip_levels,
            first_array_slice,
            array_size,
            ..
        } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
                first_level: most_detailed_mip,
                levels: mip_levels,
                first_layer: first_array_slice,
                layers: array_size,
            }),
            format: format_from_dxgi(desc.format),
        },
        _ => view_from_srv_desc(&ShaderResourceViewDesc {
            format: desc.format,
            dimension: srv1_dimension_to_base(desc.dimension),
        }),
    }
}

/// Builds an unordered-access view descriptor. `Unknown` writes the format
/// and leaves the dimension as the caller pre-initialized it. A
/// pre-initialized buffer dimension keeps its UAV flags (no abstract
/// counterpart).
pub fn view_to_uav_desc(desc: &api::ResourceViewDesc, out: &mut UnorderedAccessViewDesc) {
    out.format = desc.format as u32;
    match desc.ty {
        api::ResourceViewType::Unknown => {}
        api::ResourceViewType::Buffer(b) => {
            assert!(
                b.offset <= u64::from(u32::MAX),
                "buffer view offset exceeds the 32-bit element index"
            );
            assert!(
                b.size <= u64::from(u32::MAX),
                "buffer view size exceeds the 32-bit element count"
            );
            let flags = match out.dimension {
                UavDimension::Buffer { flags, .. } => flags,
                _ => BufferUavFlags::empty(),
            };
            out.dimension = UavDimension::Buffer {
                first_element: b.offset as u32,
                num_elements: b.size as u32,
                flags,
            };
        }
        api::ResourceViewType::Texture1d(t) => {
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            out.dimension = UavDimension::Texture1d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture1dArray(t) => {
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            out.dimension = UavDimension::Texture1dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2d(t) => {
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            out.dimension = UavDimension::Texture2d {
                mip_slice: t.first_level,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            out.dimension = UavDimension::Texture2dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
            };
        }
        api::ResourceViewType::Texture3d(t) => {
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            out.dimension = UavDimension::Texture3d {
                mip_slice: t.first_level,
                first_w_slice: t.first_layer,
                w_size: t.layers,
            };
        }
        api::ResourceViewType::Texture2dMultisample(_)
        | api::ResourceViewType::Texture2dMultisampleArray(_)
        | api::ResourceViewType::TextureCube(_)
        | api::ResourceViewType::TextureCubeArray(_) => {
            panic!("view dimension not supported for unordered-access views")
        }
    }
}

/// Reads back an unordered-access view descriptor. Buffer UAV flags are
/// dropped.
pub fn view_from_uav_desc(desc: &UnorderedAccessViewDesc) -> api::ResourceViewDesc {
    let ty = match desc.dimension {
        UavDimension::Unknown => api::ResourceViewType::Unknown,
        UavDimension::Buffer {
            first_element,
            num_elements,
            ..
        } => api::ResourceViewType::Buffer(api::BufferViewDesc {
            offset: u64::from(first_element),
            size: u64::from(num_elements),
        }),
        UavDimension::Texture1d { mip_slice } => {
            api::ResourceViewType::Texture1d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        UavDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture1dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        UavDimension::Texture2d { mip_slice } => {
            api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            })
        }
        UavDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_array_slice,
            layers: array_size,
        }),
        UavDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => api::ResourceViewType::Texture3d(api::TextureViewDesc {
            first_level: mip_slice,
            levels: 1,
            first_layer: first_w_slice,
            layers: w_size,
        }),
    };
    api::ResourceViewDesc {
        ty,
        format: format_from_dxgi(desc.format),
    }
}

fn uav1_dimension_to_base(dimension: Uav1Dimension) -> UavDimension {
    match dimension {
        Uav1Dimension::Unknown => UavDimension::Unknown,
        Uav1Dimension::Buffer {
            first_element,
            num_elements,
            flags,
        } => UavDimension::Buffer {
            first_element,
            num_elements,
            flags,
        },
        Uav1Dimension::Texture1d { mip_slice } => UavDimension::Texture1d { mip_slice },
        Uav1Dimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => UavDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        Uav1Dimension::Texture2d { mip_slice, .. } => UavDimension::Texture2d { mip_slice },
        Uav1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            ..
        } => UavDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        Uav1Dimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => UavDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        },
    }
}

fn uav_dimension_to_v1(dimension: UavDimension) -> Uav1Dimension {
    match dimension {
        UavDimension::Unknown => Uav1Dimension::Unknown,
        UavDimension::Buffer {
            first_element,
            num_elements,
            flags,
        } => Uav1Dimension::Buffer {
            first_element,
            num_elements,
            flags,
        },
        UavDimension::Texture1d { mip_slice } => Uav1Dimension::Texture1d { mip_slice },
        UavDimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => Uav1Dimension::Texture1dArray {
            mip_slice,
            first_array_slice,
            array_size,
        },
        UavDimension::Texture2d { mip_slice } => Uav1Dimension::Texture2d {
            mip_slice,
            plane_slice: 0,
        },
        UavDimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
        } => Uav1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            plane_slice: 0,
        },
        UavDimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        } => Uav1Dimension::Texture3d {
            mip_slice,
            first_w_slice,
            w_size,
        },
    }
}

/// Builds a revision-1 unordered-access view descriptor. `Unknown` writes
/// the format and leaves the dimension as the caller pre-initialized it. The
/// 2D and 2D-array dimensions are populated directly, keeping any
/// pre-initialized `plane_slice`; every other dimension goes through the
/// base translator.
pub fn view_to_uav1_desc(desc: &api::ResourceViewDesc, out: &mut UnorderedAccessViewDesc1) {
    match desc.ty {
        // Pass-through must not round-trip the dimension through the base
        // enum, which cannot carry the plane slice.
        api::ResourceViewType::Unknown => {
            out.format = desc.format as u32;
        }
        api::ResourceViewType::Texture2d(t) => {
            out.format = desc.format as u32;
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            let plane_slice = match out.dimension {
                Uav1Dimension::Texture2d { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Uav1Dimension::Texture2d {
                mip_slice: t.first_level,
                plane_slice,
            };
        }
        api::ResourceViewType::Texture2dArray(t) => {
            out.format = desc.format as u32;
            assert_eq!(t.levels, 1, "unordered-access views cover exactly one mip level");
            let plane_slice = match out.dimension {
                Uav1Dimension::Texture2dArray { plane_slice, .. } => plane_slice,
                _ => 0,
            };
            out.dimension = Uav1Dimension::Texture2dArray {
                mip_slice: t.first_level,
                first_array_slice: t.first_layer,
                array_size: t.layers,
                plane_slice,
            };
        }
        _ => {
            let mut base = UnorderedAccessViewDesc {
                format: out.format,
                dimension: uav1_dimension_to_base(out.dimension),
            };
            view_to_uav_desc(desc, &mut base);
            out.format = base.format;
            out.dimension = uav_dimension_to_v1(base.dimension);
        }
    }
}

/// Reads back a revision-1 unordered-access view descriptor. `plane_slice`
/// is dropped.
pub fn view_from_uav1_desc(desc: &UnorderedAccessViewDesc1) -> api::ResourceViewDesc {
    match desc.dimension {
        Uav1Dimension::Texture2d { mip_slice, .. } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2d(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: 0,
                layers: 0,
            }),
            format: format_from_dxgi(desc.format),
        },
        Uav1Dimension::Texture2dArray {
            mip_slice,
            first_array_slice,
            array_size,
            ..
        } => api::ResourceViewDesc {
            ty: api::ResourceViewType::Texture2dArray(api::TextureViewDesc {
                first_level: mip_slice,
                levels: 1,
                first_layer: first_array_slice,
                layers: array_size,
            }),
            format: format_from_dxgi(desc.format),
        },
        _ => view_from_uav_desc(&UnorderedAccessViewDesc {
            format: desc.format,
            dimension: uav1_dimension_to_base(desc.dimension),
        }),
    }
}
