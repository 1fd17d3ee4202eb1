//! Texture and buffer element formats.
//!
//! The abstract format enumeration deliberately adopts DXGI numbering so the
//! D3D11 backend can convert by numeric value; other backends carry explicit
//! per-format tables. The DXGI video formats (100..=114) never appear in
//! resource or view descriptors and are not represented.

/// Backend-neutral data format, numbered to match `DXGI_FORMAT`.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Unknown = 0,
    R32G32B32A32Typeless = 1,
    R32G32B32A32Float = 2,
    R32G32B32A32Uint = 3,
    R32G32B32A32Sint = 4,
    R32G32B32Typeless = 5,
    R32G32B32Float = 6,
    R32G32B32Uint = 7,
    R32G32B32Sint = 8,
    R16G16B16A16Typeless = 9,
    R16G16B16A16Float = 10,
    R16G16B16A16Unorm = 11,
    R16G16B16A16Uint = 12,
    R16G16B16A16Snorm = 13,
    R16G16B16A16Sint = 14,
    R32G32Typeless = 15,
    R32G32Float = 16,
    R32G32Uint = 17,
    R32G32Sint = 18,
    R32G8X24Typeless = 19,
    D32FloatS8X24Uint = 20,
    R32FloatX8X24Typeless = 21,
    X32TypelessG8X24Uint = 22,
    R10G10B10A2Typeless = 23,
    R10G10B10A2Unorm = 24,
    R10G10B10A2Uint = 25,
    R11G11B10Float = 26,
    R8G8B8A8Typeless = 27,
    R8G8B8A8Unorm = 28,
    R8G8B8A8UnormSrgb = 29,
    R8G8B8A8Uint = 30,
    R8G8B8A8Snorm = 31,
    R8G8B8A8Sint = 32,
    R16G16Typeless = 33,
    R16G16Float = 34,
    R16G16Unorm = 35,
    R16G16Uint = 36,
    R16G16Snorm = 37,
    R16G16Sint = 38,
    R32Typeless = 39,
    D32Float = 40,
    R32Float = 41,
    R32Uint = 42,
    R32Sint = 43,
    R24G8Typeless = 44,
    D24UnormS8Uint = 45,
    R24UnormX8Typeless = 46,
    X24TypelessG8Uint = 47,
    R8G8Typeless = 48,
    R8G8Unorm = 49,
    R8G8Uint = 50,
    R8G8Snorm = 51,
    R8G8Sint = 52,
    R16Typeless = 53,
    R16Float = 54,
    D16Unorm = 55,
    R16Unorm = 56,
    R16Uint = 57,
    R16Snorm = 58,
    R16Sint = 59,
    R8Typeless = 60,
    R8Unorm = 61,
    R8Uint = 62,
    R8Snorm = 63,
    R8Sint = 64,
    A8Unorm = 65,
    R1Unorm = 66,
    R9G9B9E5SharedExp = 67,
    R8G8B8G8Unorm = 68,
    G8R8G8B8Unorm = 69,
    Bc1Typeless = 70,
    Bc1Unorm = 71,
    Bc1UnormSrgb = 72,
    Bc2Typeless = 73,
    Bc2Unorm = 74,
    Bc2UnormSrgb = 75,
    Bc3Typeless = 76,
    Bc3Unorm = 77,
    Bc3UnormSrgb = 78,
    Bc4Typeless = 79,
    Bc4Unorm = 80,
    Bc4Snorm = 81,
    Bc5Typeless = 82,
    Bc5Unorm = 83,
    Bc5Snorm = 84,
    B5G6R5Unorm = 85,
    B5G5R5A1Unorm = 86,
    B8G8R8A8Unorm = 87,
    B8G8R8X8Unorm = 88,
    R10G10B10XrBiasA2Unorm = 89,
    B8G8R8A8Typeless = 90,
    B8G8R8A8UnormSrgb = 91,
    B8G8R8X8Typeless = 92,
    B8G8R8X8UnormSrgb = 93,
    Bc6hTypeless = 94,
    Bc6hUf16 = 95,
    Bc6hSf16 = 96,
    Bc7Typeless = 97,
    Bc7Unorm = 98,
    Bc7UnormSrgb = 99,
    B4G4R4A4Unorm = 115,
}

impl Format {
    /// Decodes a raw DXGI format value. Returns `None` for values with no
    /// representation (reserved ranges and the video formats).
    pub const fn from_u32(v: u32) -> Option<Self> {
        Some(match v {
            0 => Self::Unknown,
            1 => Self::R32G32B32A32Typeless,
            2 => Self::R32G32B32A32Float,
            3 => Self::R32G32B32A32Uint,
            4 => Self::R32G32B32A32Sint,
            5 => Self::R32G32B32Typeless,
            6 => Self::R32G32B32Float,
            7 => Self::R32G32B32Uint,
            8 => Self::R32G32B32Sint,
            9 => Self::R16G16B16A16Typeless,
            10 => Self::R16G16B16A16Float,
            11 => Self::R16G16B16A16Unorm,
            12 => Self::R16G16B16A16Uint,
            13 => Self::R16G16B16A16Snorm,
            14 => Self::R16G16B16A16Sint,
            15 => Self::R32G32Typeless,
            16 => Self::R32G32Float,
            17 => Self::R32G32Uint,
            18 => Self::R32G32Sint,
            19 => Self::R32G8X24Typeless,
            20 => Self::D32FloatS8X24Uint,
            21 => Self::R32FloatX8X24Typeless,
            22 => Self::X32TypelessG8X24Uint,
            23 => Self::R10G10B10A2Typeless,
            24 => Self::R10G10B10A2Unorm,
            25 => Self::R10G10B10A2Uint,
            26 => Self::R11G11B10Float,
            27 => Self::R8G8B8A8Typeless,
            28 => Self::R8G8B8A8Unorm,
            29 => Self::R8G8B8A8UnormSrgb,
            30 => Self::R8G8B8A8Uint,
            31 => Self::R8G8B8A8Snorm,
            32 => Self::R8G8B8A8Sint,
            33 => Self::R16G16Typeless,
            34 => Self::R16G16Float,
            35 => Self::R16G16Unorm,
            36 => Self::R16G16Uint,
            37 => Self::R16G16Snorm,
            38 => Self::R16G16Sint,
            39 => Self::R32Typeless,
            40 => Self::D32Float,
            41 => Self::R32Float,
            42 => Self::R32Uint,
            43 => Self::R32Sint,
            44 => Self::R24G8Typeless,
            45 => Self::D24UnormS8Uint,
            46 => Self::R24UnormX8Typeless,
            47 => Self::X24TypelessG8Uint,
            48 => Self::R8G8Typeless,
            49 => Self::R8G8Unorm,
            50 => Self::R8G8Uint,
            51 => Self::R8G8Snorm,
            52 => Self::R8G8Sint,
            53 => Self::R16Typeless,
            54 => Self::R16Float,
            55 => Self::D16Unorm,
            56 => Self::R16Unorm,
            57 => Self::R16Uint,
            58 => Self::R16Snorm,
            59 => Self::R16Sint,
            60 => Self::R8Typeless,
            61 => Self::R8Unorm,
            62 => Self::R8Uint,
            63 => Self::R8Snorm,
            64 => Self::R8Sint,
            65 => Self::A8Unorm,
            66 => Self::R1Unorm,
            67 => Self::R9G9B9E5SharedExp,
            68 => Self::R8G8B8G8Unorm,
            69 => Self::G8R8G8B8Unorm,
            70 => Self::Bc1Typeless,
            71 => Self::Bc1Unorm,
            72 => Self::Bc1UnormSrgb,
            73 => Self::Bc2Typeless,
            74 => Self::Bc2Unorm,
            75 => Self::Bc2UnormSrgb,
            76 => Self::Bc3Typeless,
            77 => Self::Bc3Unorm,
            78 => Self::Bc3UnormSrgb,
            79 => Self::Bc4Typeless,
            80 => Self::Bc4Unorm,
            81 => Self::Bc4Snorm,
            82 => Self::Bc5Typeless,
            83 => Self::Bc5Unorm,
            84 => Self::Bc5Snorm,
            85 => Self::B5G6R5Unorm,
            86 => Self::B5G5R5A1Unorm,
            87 => Self::B8G8R8A8Unorm,
            88 => Self::B8G8R8X8Unorm,
            89 => Self::R10G10B10XrBiasA2Unorm,
            90 => Self::B8G8R8A8Typeless,
            91 => Self::B8G8R8A8UnormSrgb,
            92 => Self::B8G8R8X8Typeless,
            93 => Self::B8G8R8X8UnormSrgb,
            94 => Self::Bc6hTypeless,
            95 => Self::Bc6hUf16,
            96 => Self::Bc6hSf16,
            97 => Self::Bc7Typeless,
            98 => Self::Bc7Unorm,
            99 => Self::Bc7UnormSrgb,
            115 => Self::B4G4R4A4Unorm,
            _ => return None,
        })
    }
}
