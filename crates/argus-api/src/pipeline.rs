//! Fixed-function pipeline state enums.
//!
//! The offset-coded enums (`BlendOp`, `CompareOp`, `StencilOp`, `CullMode`)
//! are deliberately numbered one unit below their D3D counterparts, which
//! reserve their first value for a case this model omits. Backends that can
//! exploit the parallel numbering convert by adding a fixed offset.

/// RGB/alpha blend equation operator.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendOp {
    Add = 0,
    Subtract = 1,
    ReverseSubtract = 2,
    Min = 3,
    Max = 4,
}

/// Source/destination blend factor.
///
/// `ConstantColor`/`ConstantAlpha` (and their inverses) are distinct here but
/// collapse onto a single "blend constant" token on backends that only track
/// one constant; those backends cannot offer a reverse conversion.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    SrcColor = 2,
    InvSrcColor = 3,
    DstColor = 4,
    InvDstColor = 5,
    SrcAlpha = 6,
    InvSrcAlpha = 7,
    DstAlpha = 8,
    InvDstAlpha = 9,
    ConstantColor = 10,
    InvConstantColor = 11,
    ConstantAlpha = 12,
    InvConstantAlpha = 13,
    SrcAlphaSat = 14,
    Src1Color = 15,
    InvSrc1Color = 16,
    Src1Alpha = 17,
    InvSrc1Alpha = 18,
}

/// Polygon rasterization mode. `Point` is not supported by every backend.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillMode {
    Point = 1,
    Wireframe = 2,
    Solid = 3,
}

/// Face culling mode. `FrontAndBack` is not supported by every backend.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CullMode {
    None = 0,
    Front = 1,
    Back = 2,
    FrontAndBack = 3,
}

/// Depth/stencil comparison function.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Never = 0,
    Less = 1,
    Equal = 2,
    LessEqual = 3,
    Greater = 4,
    NotEqual = 5,
    GreaterEqual = 6,
    Always = 7,
}

/// Stencil buffer operation.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StencilOp {
    Keep = 0,
    Zero = 1,
    Replace = 2,
    IncrementSaturate = 3,
    DecrementSaturate = 4,
    Invert = 5,
    Increment = 6,
    Decrement = 7,
}

/// Input-assembler primitive topology, numbered to match the D3D values.
///
/// `TriangleFan` exists for backends that support it natively; D3D10+
/// backends reject it. Patch-list topologies are not represented.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    Undefined = 0,
    PointList = 1,
    LineList = 2,
    LineStrip = 3,
    TriangleList = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
    LineListAdj = 10,
    LineStripAdj = 11,
    TriangleListAdj = 12,
    TriangleStripAdj = 13,
}

impl PrimitiveTopology {
    /// Decodes a raw topology value. Returns `None` for unrepresented values
    /// (including the patch-list range).
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            0 => Self::Undefined,
            1 => Self::PointList,
            2 => Self::LineList,
            3 => Self::LineStrip,
            4 => Self::TriangleList,
            5 => Self::TriangleStrip,
            6 => Self::TriangleFan,
            10 => Self::LineListAdj,
            11 => Self::LineStripAdj,
            12 => Self::TriangleListAdj,
            13 => Self::TriangleStripAdj,
            _ => return None,
        })
    }
}
