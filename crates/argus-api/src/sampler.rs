//! Backend-neutral sampler state.

/// Combined min/mag/mip filtering mode, numbered to match the D3D filter
/// encoding (bit 0 = mip linear, bit 2 = mag linear, bit 4 = min linear,
/// `0x55` = anisotropic).
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

/// Texture coordinate addressing outside [0, 1], D3D numbering.
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

/// Description of a texture sampler.
///
/// Comparison sampling and border color are backend details the abstract
/// model does not carry; backends fill fixed defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerDesc {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: f32,
    pub min_lod: f32,
    pub max_lod: f32,
}
