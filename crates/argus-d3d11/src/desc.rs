//! Rust models of the D3D11 creation and view descriptors.
//!
//! Field names and numeric values mirror the D3D11 API. The
//! `ViewDimension`-tagged unions of the native view descriptors are modeled
//! as data-carrying enums (one variant per dimension, `Unknown` default)
//! instead of layout-compatible unions; the `...1` descriptor revisions are
//! independent types rather than overlays.

use bitflags::bitflags;

/// `D3D11_USAGE`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Usage {
    #[default]
    Default = 0,
    Immutable = 1,
    Dynamic = 2,
    Staging = 3,
}

impl Usage {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            0 => Self::Default,
            1 => Self::Immutable,
            2 => Self::Dynamic,
            3 => Self::Staging,
            _ => return None,
        })
    }
}

bitflags! {
    /// `D3D11_BIND_FLAG`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BindFlags: u32 {
        const VERTEX_BUFFER = 0x1;
        const INDEX_BUFFER = 0x2;
        const CONSTANT_BUFFER = 0x4;
        const SHADER_RESOURCE = 0x8;
        const STREAM_OUTPUT = 0x10;
        const RENDER_TARGET = 0x20;
        const DEPTH_STENCIL = 0x40;
        const UNORDERED_ACCESS = 0x80;
        const DECODER = 0x200;
        const VIDEO_ENCODER = 0x400;
    }
}

bitflags! {
    /// `D3D11_CPU_ACCESS_FLAG`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CpuAccessFlags: u32 {
        const WRITE = 0x10000;
        const READ = 0x20000;
    }
}

bitflags! {
    /// `D3D11_DSV_FLAG`. No abstract counterpart; conversions never touch it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DsvFlags: u32 {
        const READ_ONLY_DEPTH = 0x1;
        const READ_ONLY_STENCIL = 0x2;
    }
}

bitflags! {
    /// `D3D11_BUFFER_UAV_FLAG`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BufferUavFlags: u32 {
        const RAW = 0x1;
        const APPEND = 0x2;
        const COUNTER = 0x4;
    }
}

bitflags! {
    /// `D3D11_BUFFEREX_SRV_FLAG`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BufferExSrvFlags: u32 {
        const RAW = 0x1;
    }
}

/// `D3D11_BLEND`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blend {
    Zero = 1,
    One = 2,
    SrcColor = 3,
    InvSrcColor = 4,
    SrcAlpha = 5,
    InvSrcAlpha = 6,
    DestAlpha = 7,
    InvDestAlpha = 8,
    DestColor = 9,
    InvDestColor = 10,
    SrcAlphaSat = 11,
    BlendFactor = 14,
    InvBlendFactor = 15,
    Src1Color = 16,
    InvSrc1Color = 17,
    Src1Alpha = 18,
    InvSrc1Alpha = 19,
}

/// `D3D11_BLEND_OP`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendOp {
    Add = 1,
    Subtract = 2,
    RevSubtract = 3,
    Min = 4,
    Max = 5,
}

impl BlendOp {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            1 => Self::Add,
            2 => Self::Subtract,
            3 => Self::RevSubtract,
            4 => Self::Min,
            5 => Self::Max,
            _ => return None,
        })
    }
}

/// `D3D11_FILL_MODE`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillMode {
    Wireframe = 2,
    Solid = 3,
}

/// `D3D11_CULL_MODE`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CullMode {
    None = 1,
    Front = 2,
    Back = 3,
}

impl CullMode {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            1 => Self::None,
            2 => Self::Front,
            3 => Self::Back,
            _ => return None,
        })
    }
}

/// `D3D11_COMPARISON_FUNC`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonFunc {
    Never = 1,
    Less = 2,
    Equal = 3,
    LessEqual = 4,
    Greater = 5,
    NotEqual = 6,
    GreaterEqual = 7,
    Always = 8,
}

impl ComparisonFunc {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            1 => Self::Never,
            2 => Self::Less,
            3 => Self::Equal,
            4 => Self::LessEqual,
            5 => Self::Greater,
            6 => Self::NotEqual,
            7 => Self::GreaterEqual,
            8 => Self::Always,
            _ => return None,
        })
    }
}

/// `D3D11_STENCIL_OP`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StencilOp {
    Keep = 1,
    Zero = 2,
    Replace = 3,
    IncrSat = 4,
    DecrSat = 5,
    Invert = 6,
    Incr = 7,
    Decr = 8,
}

impl StencilOp {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            1 => Self::Keep,
            2 => Self::Zero,
            3 => Self::Replace,
            4 => Self::IncrSat,
            5 => Self::DecrSat,
            6 => Self::Invert,
            7 => Self::Incr,
            8 => Self::Decr,
            _ => return None,
        })
    }
}

/// `D3D11_PRIMITIVE_TOPOLOGY`. D3D11 has no triangle fan; patch-list
/// topologies (33..=64) are outside the translation layer's scope.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    Undefined = 0,
    PointList = 1,
    LineList = 2,
    LineStrip = 3,
    TriangleList = 4,
    TriangleStrip = 5,
    LineListAdj = 10,
    LineStripAdj = 11,
    TriangleListAdj = 12,
    TriangleStripAdj = 13,
}

impl PrimitiveTopology {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            0 => Self::Undefined,
            1 => Self::PointList,
            2 => Self::LineList,
            3 => Self::LineStrip,
            4 => Self::TriangleList,
            5 => Self::TriangleStrip,
            10 => Self::LineListAdj,
            11 => Self::LineStripAdj,
            12 => Self::TriangleListAdj,
            13 => Self::TriangleStripAdj,
            _ => return None,
        })
    }
}

/// `D3D11_FILTER` (the subset without comparison/min/max reduction).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    MinMagMipPoint = 0x00,
    MinMagPointMipLinear = 0x01,
    MinPointMagLinearMipPoint = 0x04,
    MinPointMagMipLinear = 0x05,
    MinLinearMagMipPoint = 0x10,
    MinLinearMagPointMipLinear = 0x11,
    MinMagLinearMipPoint = 0x14,
    MinMagMipLinear = 0x15,
    Anisotropic = 0x55,
}

impl Filter {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            0x00 => Self::MinMagMipPoint,
            0x01 => Self::MinMagPointMipLinear,
            0x04 => Self::MinPointMagLinearMipPoint,
            0x05 => Self::MinPointMagMipLinear,
            0x10 => Self::MinLinearMagMipPoint,
            0x11 => Self::MinLinearMagPointMipLinear,
            0x14 => Self::MinMagLinearMipPoint,
            0x15 => Self::MinMagMipLinear,
            0x55 => Self::Anisotropic,
            _ => return None,
        })
    }
}

/// `D3D11_TEXTURE_ADDRESS_MODE`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureAddressMode {
    Wrap = 1,
    Mirror = 2,
    Clamp = 3,
    Border = 4,
    MirrorOnce = 5,
}

impl TextureAddressMode {
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            1 => Self::Wrap,
            2 => Self::Mirror,
            3 => Self::Clamp,
            4 => Self::Border,
            5 => Self::MirrorOnce,
            _ => return None,
        })
    }
}

/// `DXGI_SAMPLE_DESC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleDesc {
    pub count: u32,
    pub quality: u32,
}

impl Default for SampleDesc {
    fn default() -> Self {
        Self {
            count: 1,
            quality: 0,
        }
    }
}

/// `D3D11_BUFFER_DESC`. `misc_flags` and `structure_byte_stride` have no
/// abstract counterpart and are never written by conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BufferDesc {
    pub byte_width: u32,
    pub usage: Usage,
    pub bind_flags: BindFlags,
    pub cpu_access_flags: CpuAccessFlags,
    pub misc_flags: u32,
    pub structure_byte_stride: u32,
}

/// `D3D11_TEXTURE1D_DESC`. `format` is a raw `DXGI_FORMAT` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Texture1dDesc {
    pub width: u32,
    pub mip_levels: u32,
    pub array_size: u32,
    pub format: u32,
    pub usage: Usage,
    pub bind_flags: BindFlags,
    pub cpu_access_flags: CpuAccessFlags,
    pub misc_flags: u32,
}

/// `D3D11_TEXTURE2D_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Texture2dDesc {
    pub width: u32,
    pub height: u32,
    pub mip_levels: u32,
    pub array_size: u32,
    pub format: u32,
    pub sample_desc: SampleDesc,
    pub usage: Usage,
    pub bind_flags: BindFlags,
    pub cpu_access_flags: CpuAccessFlags,
    pub misc_flags: u32,
}

/// `D3D11_TEXTURE3D_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Texture3dDesc {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_levels: u32,
    pub format: u32,
    pub usage: Usage,
    pub bind_flags: BindFlags,
    pub cpu_access_flags: CpuAccessFlags,
    pub misc_flags: u32,
}

/// `D3D11_SAMPLER_DESC`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerDesc {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunc,
    pub border_color: [f32; 4],
    pub min_lod: f32,
    pub max_lod: f32,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        Self {
            filter: Filter::MinMagMipLinear,
            address_u: TextureAddressMode::Clamp,
            address_v: TextureAddressMode::Clamp,
            address_w: TextureAddressMode::Clamp,
            mip_lod_bias: 0.0,
            max_anisotropy: 1,
            comparison_func: ComparisonFunc::Never,
            border_color: [0.0; 4],
            min_lod: 0.0,
            max_lod: f32::MAX,
        }
    }
}

/// `D3D11_DSV_DIMENSION` plus the payload valid for each dimension.
/// Depth-stencil views never target buffers, 3D textures, or cubes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DsvDimension {
    #[default]
    Unknown,
    Texture1d {
        mip_slice: u32,
    },
    Texture1dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        mip_slice: u32,
    },
    Texture2dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2dMs,
    Texture2dMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
}

/// `D3D11_DEPTH_STENCIL_VIEW_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DepthStencilViewDesc {
    /// Raw `DXGI_FORMAT` value.
    pub format: u32,
    pub flags: DsvFlags,
    pub dimension: DsvDimension,
}

/// `D3D11_RTV_DIMENSION` plus per-dimension payload. Render-target views
/// never target buffers or cubes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RtvDimension {
    #[default]
    Unknown,
    Texture1d {
        mip_slice: u32,
    },
    Texture1dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        mip_slice: u32,
    },
    Texture2dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2dMs,
    Texture2dMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3d {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D11_RENDER_TARGET_VIEW_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderTargetViewDesc {
    pub format: u32,
    pub dimension: RtvDimension,
}

/// `D3D11_RTV_DIMENSION` payloads for the `D3D11_RENDER_TARGET_VIEW_DESC1`
/// revision, which extends the 2D and 2D-array dimensions with a plane slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rtv1Dimension {
    #[default]
    Unknown,
    Texture1d {
        mip_slice: u32,
    },
    Texture1dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture2dMs,
    Texture2dMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3d {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D11_RENDER_TARGET_VIEW_DESC1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderTargetViewDesc1 {
    pub format: u32,
    pub dimension: Rtv1Dimension,
}

/// `D3D11_SRV_DIMENSION` plus per-dimension payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SrvDimension {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
    },
    Texture1d {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture1dArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture2dArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2dMs,
    Texture2dMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3d {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
    /// Raw/structured buffer SRV (`D3D11_BUFFEREX_SRV`).
    BufferEx {
        first_element: u32,
        num_elements: u32,
        flags: BufferExSrvFlags,
    },
}

/// `D3D11_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShaderResourceViewDesc {
    pub format: u32,
    pub dimension: SrvDimension,
}

/// `D3D11_SRV_DIMENSION` payloads for `D3D11_SHADER_RESOURCE_VIEW_DESC1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Srv1Dimension {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
    },
    Texture1d {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture1dArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        most_detailed_mip: u32,
        mip_levels: u32,
        plane_slice: u32,
    },
    Texture2dArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture2dMs,
    Texture2dMsArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3d {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
    BufferEx {
        first_element: u32,
        num_elements: u32,
        flags: BufferExSrvFlags,
    },
}

/// `D3D11_SHADER_RESOURCE_VIEW_DESC1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShaderResourceViewDesc1 {
    pub format: u32,
    pub dimension: Srv1Dimension,
}

/// `D3D11_UAV_DIMENSION` plus per-dimension payload. Unordered-access views
/// never target cubes or multisampled textures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UavDimension {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
        flags: BufferUavFlags,
    },
    Texture1d {
        mip_slice: u32,
    },
    Texture1dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        mip_slice: u32,
    },
    Texture2dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3d {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D11_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnorderedAccessViewDesc {
    pub format: u32,
    pub dimension: UavDimension,
}

/// `D3D11_UAV_DIMENSION` payloads for `D3D11_UNORDERED_ACCESS_VIEW_DESC1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Uav1Dimension {
    #[default]
    Unknown,
    Buffer {
        first_element: u32,
        num_elements: u32,
        flags: BufferUavFlags,
    },
    Texture1d {
        mip_slice: u32,
    },
    Texture1dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2d {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2dArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture3d {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

/// `D3D11_UNORDERED_ACCESS_VIEW_DESC1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnorderedAccessViewDesc1 {
    pub format: u32,
    pub dimension: Uav1Dimension,
}
