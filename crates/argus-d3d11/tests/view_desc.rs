use argus_api::{
    BufferViewDesc, Format, ResourceViewDesc, ResourceViewType, TextureViewDesc,
};
use argus_d3d11::convert;
use argus_d3d11::desc;

fn texture_view(first_level: u32, levels: u32, first_layer: u32, layers: u32) -> TextureViewDesc {
    TextureViewDesc {
        first_level,
        levels,
        first_layer,
        layers,
    }
}

#[test]
fn srv_texture2d_array_round_trip() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2dArray(texture_view(2, 4, 3, 5)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc::default();
    convert::view_to_srv_desc(&view, &mut native);
    assert_eq!(native.format, Format::R8G8B8A8Unorm as u32);
    assert_eq!(
        native.dimension,
        desc::SrvDimension::Texture2dArray {
            most_detailed_mip: 2,
            mip_levels: 4,
            first_array_slice: 3,
            array_size: 5,
        }
    );
    assert_eq!(convert::view_from_srv_desc(&native), view);
}

#[test]
fn srv_texture2d_array_single_level_round_trip() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2dArray(texture_view(2, 1, 3, 5)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc::default();
    convert::view_to_srv_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::SrvDimension::Texture2dArray {
            most_detailed_mip: 2,
            mip_levels: 1,
            first_array_slice: 3,
            array_size: 5,
        }
    );
    assert_eq!(convert::view_from_srv_desc(&native), view);
}

#[test]
fn srv_buffer_view_maps_element_range() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Buffer(BufferViewDesc {
            offset: 16,
            size: 1024,
        }),
        format: Format::R32Uint,
    };
    let mut native = desc::ShaderResourceViewDesc::default();
    convert::view_to_srv_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::SrvDimension::Buffer {
            first_element: 16,
            num_elements: 1024,
        }
    );
    assert_eq!(convert::view_from_srv_desc(&native), view);
}

#[test]
fn srv_cube_array_layer_count_scales_by_six() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::TextureCubeArray(texture_view(0, 1, 6, 12)),
        format: Format::Bc1Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc::default();
    convert::view_to_srv_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::SrvDimension::TextureCubeArray {
            most_detailed_mip: 0,
            mip_levels: 1,
            first_2d_array_face: 6,
            num_cubes: 2,
        }
    );
    assert_eq!(convert::view_from_srv_desc(&native), view);
}

#[test]
fn srv_cube_array_all_layers_sentinel_passes_unscaled() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::TextureCubeArray(texture_view(
            0,
            1,
            0,
            TextureViewDesc::ALL_LAYERS,
        )),
        format: Format::Bc1Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc::default();
    convert::view_to_srv_desc(&view, &mut native);
    let desc::SrvDimension::TextureCubeArray { num_cubes, .. } = native.dimension else {
        panic!("expected a cube-array dimension");
    };
    assert_eq!(num_cubes, TextureViewDesc::ALL_LAYERS);
    assert_eq!(convert::view_from_srv_desc(&native), view);
}

#[test]
fn unknown_view_only_writes_the_format() {
    let pre_initialized = desc::SrvDimension::Texture2d {
        most_detailed_mip: 1,
        mip_levels: 3,
    };
    let mut native = desc::ShaderResourceViewDesc {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: pre_initialized,
    };
    let view = ResourceViewDesc {
        ty: ResourceViewType::Unknown,
        format: Format::R8G8B8A8UnormSrgb,
    };
    convert::view_to_srv_desc(&view, &mut native);
    assert_eq!(native.format, Format::R8G8B8A8UnormSrgb as u32);
    assert_eq!(native.dimension, pre_initialized);
}

#[test]
fn raw_buffer_srv_reads_back_as_unknown() {
    let native = desc::ShaderResourceViewDesc {
        format: Format::R32Typeless as u32,
        dimension: desc::SrvDimension::BufferEx {
            first_element: 0,
            num_elements: 256,
            flags: desc::BufferExSrvFlags::RAW,
        },
    };
    let back = convert::view_from_srv_desc(&native);
    assert_eq!(back.ty, ResourceViewType::Unknown);
    assert_eq!(back.format, Format::R32Typeless);
}

#[test]
fn dsv_texture2d_array_round_trip() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2dArray(texture_view(1, 1, 2, 4)),
        format: Format::D24UnormS8Uint,
    };
    let mut native = desc::DepthStencilViewDesc::default();
    convert::view_to_dsv_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::DsvDimension::Texture2dArray {
            mip_slice: 1,
            first_array_slice: 2,
            array_size: 4,
        }
    );
    let back = convert::view_from_dsv_desc(&native);
    assert_eq!(back, view);
}

#[test]
fn dsv_conversion_never_touches_read_only_flags() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2d(texture_view(0, 1, 0, 0)),
        format: Format::D32Float,
    };
    let mut native = desc::DepthStencilViewDesc {
        flags: desc::DsvFlags::READ_ONLY_DEPTH,
        ..Default::default()
    };
    convert::view_to_dsv_desc(&view, &mut native);
    assert_eq!(native.flags, desc::DsvFlags::READ_ONLY_DEPTH);
}

#[test]
#[should_panic(expected = "one mip level")]
fn dsv_conversion_rejects_multi_level_views() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2d(texture_view(0, 2, 0, 0)),
        format: Format::D32Float,
    };
    let mut native = desc::DepthStencilViewDesc::default();
    convert::view_to_dsv_desc(&view, &mut native);
}

#[test]
#[should_panic(expected = "cannot target buffers")]
fn dsv_conversion_rejects_buffer_views() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Buffer(BufferViewDesc::default()),
        format: Format::Unknown,
    };
    let mut native = desc::DepthStencilViewDesc::default();
    convert::view_to_dsv_desc(&view, &mut native);
}

#[test]
fn rtv_texture3d_maps_w_range() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture3d(texture_view(2, 1, 8, 16)),
        format: Format::R16G16B16A16Float,
    };
    let mut native = desc::RenderTargetViewDesc::default();
    convert::view_to_rtv_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::RtvDimension::Texture3d {
            mip_slice: 2,
            first_w_slice: 8,
            w_size: 16,
        }
    );
    assert_eq!(convert::view_from_rtv_desc(&native), view);
}

#[test]
fn rtv_multisample_round_trip() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2dMultisample(texture_view(0, 1, 0, 0)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::RenderTargetViewDesc::default();
    convert::view_to_rtv_desc(&view, &mut native);
    assert_eq!(native.dimension, desc::RtvDimension::Texture2dMs);
    assert_eq!(convert::view_from_rtv_desc(&native), view);
}

#[test]
fn rtv1_keeps_pre_initialized_plane_slice() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2d(texture_view(3, 1, 0, 0)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::RenderTargetViewDesc1 {
        format: 0,
        dimension: desc::Rtv1Dimension::Texture2d {
            mip_slice: 0,
            plane_slice: 1,
        },
    };
    convert::view_to_rtv1_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::Rtv1Dimension::Texture2d {
            mip_slice: 3,
            plane_slice: 1,
        }
    );
}

#[test]
fn rtv1_reverse_drops_the_plane_slice() {
    let native = desc::RenderTargetViewDesc1 {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: desc::Rtv1Dimension::Texture2dArray {
            mip_slice: 1,
            first_array_slice: 2,
            array_size: 3,
            plane_slice: 1,
        },
    };
    let back = convert::view_from_rtv1_desc(&native);
    assert_eq!(
        back.ty,
        ResourceViewType::Texture2dArray(texture_view(1, 1, 2, 3))
    );
}

#[test]
fn rtv1_delegates_non_2d_dimensions() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture3d(texture_view(0, 1, 0, 4)),
        format: Format::R32Float,
    };
    let mut native = desc::RenderTargetViewDesc1::default();
    convert::view_to_rtv1_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::Rtv1Dimension::Texture3d {
            mip_slice: 0,
            first_w_slice: 0,
            w_size: 4,
        }
    );
    assert_eq!(convert::view_from_rtv1_desc(&native), view);
}

#[test]
fn srv1_cube_map_delegates_to_the_base_translator() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::TextureCube(texture_view(1, 5, 0, 0)),
        format: Format::Bc7Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc1::default();
    convert::view_to_srv1_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::Srv1Dimension::TextureCube {
            most_detailed_mip: 1,
            mip_levels: 5,
        }
    );
    assert_eq!(convert::view_from_srv1_desc(&native), view);
}

#[test]
fn srv1_texture2d_keeps_pre_initialized_plane_slice() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2d(texture_view(0, 9, 0, 0)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::ShaderResourceViewDesc1 {
        format: 0,
        dimension: desc::Srv1Dimension::Texture2d {
            most_detailed_mip: 0,
            mip_levels: 0,
            plane_slice: 1,
        },
    };
    convert::view_to_srv1_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::Srv1Dimension::Texture2d {
            most_detailed_mip: 0,
            mip_levels: 9,
            plane_slice: 1,
        }
    );
}

#[test]
fn uav_buffer_keeps_pre_initialized_uav_flags() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Buffer(BufferViewDesc {
            offset: 0,
            size: 128,
        }),
        format: Format::R32Typeless,
    };
    let mut native = desc::UnorderedAccessViewDesc {
        format: 0,
        dimension: desc::UavDimension::Buffer {
            first_element: 0,
            num_elements: 0,
            flags: desc::BufferUavFlags::RAW | desc::BufferUavFlags::COUNTER,
        },
    };
    convert::view_to_uav_desc(&view, &mut native);
    assert_eq!(
        native.dimension,
        desc::UavDimension::Buffer {
            first_element: 0,
            num_elements: 128,
            flags: desc::BufferUavFlags::RAW | desc::BufferUavFlags::COUNTER,
        }
    );
}

#[test]
fn uav_buffer_flags_are_dropped_on_read_back() {
    let native = desc::UnorderedAccessViewDesc {
        format: Format::R32Typeless as u32,
        dimension: desc::UavDimension::Buffer {
            first_element: 4,
            num_elements: 64,
            flags: desc::BufferUavFlags::APPEND,
        },
    };
    let back = convert::view_from_uav_desc(&native);
    assert_eq!(
        back.ty,
        ResourceViewType::Buffer(BufferViewDesc {
            offset: 4,
            size: 64,
        })
    );
}

#[test]
#[should_panic(expected = "one mip level")]
fn uav_conversion_rejects_multi_level_views() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2d(texture_view(0, 2, 0, 0)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::UnorderedAccessViewDesc::default();
    convert::view_to_uav_desc(&view, &mut native);
}

#[test]
#[should_panic(expected = "not supported for unordered-access views")]
fn uav_conversion_rejects_multisampled_views() {
    let view = ResourceViewDesc {
        ty: ResourceViewType::Texture2dMultisample(texture_view(0, 1, 0, 0)),
        format: Format::R8G8B8A8Unorm,
    };
    let mut native = desc::UnorderedAccessViewDesc::default();
    convert::view_to_uav_desc(&view, &mut native);
}

#[test]
fn uav1_round_trip_resets_the_plane_slice() {
    let native = desc::UnorderedAccessViewDesc1 {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: desc::Uav1Dimension::Texture2d {
            mip_slice: 4,
            plane_slice: 1,
        },
    };
    let back = convert::view_from_uav1_desc(&native);
    assert_eq!(back.ty, ResourceViewType::Texture2d(texture_view(4, 1, 0, 0)));

    let mut rebuilt = desc::UnorderedAccessViewDesc1::default();
    convert::view_to_uav1_desc(&back, &mut rebuilt);
    assert_eq!(
        rebuilt.dimension,
        desc::Uav1Dimension::Texture2d {
            mip_slice: 4,
            plane_slice: 0,
        }
    );
}

#[test]
fn unknown_view_keeps_pre_initialized_srv1_plane_slice() {
    let pre_initialized = desc::Srv1Dimension::Texture2d {
        most_detailed_mip: 1,
        mip_levels: 2,
        plane_slice: 1,
    };
    let mut native = desc::ShaderResourceViewDesc1 {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: pre_initialized,
    };
    let view = ResourceViewDesc {
        ty: ResourceViewType::Unknown,
        format: Format::R8G8B8A8UnormSrgb,
    };
    convert::view_to_srv1_desc(&view, &mut native);
    assert_eq!(native.format, Format::R8G8B8A8UnormSrgb as u32);
    assert_eq!(native.dimension, pre_initialized);
}

#[test]
fn unknown_view_keeps_pre_initialized_rtv1_plane_slice() {
    let pre_initialized = desc::Rtv1Dimension::Texture2dArray {
        mip_slice: 0,
        first_array_slice: 2,
        array_size: 4,
        plane_slice: 1,
    };
    let mut native = desc::RenderTargetViewDesc1 {
        format: Format::B8G8R8A8Unorm as u32,
        dimension: pre_initialized,
    };
    let view = ResourceViewDesc {
        ty: ResourceViewType::Unknown,
        format: Format::B8G8R8A8UnormSrgb,
    };
    convert::view_to_rtv1_desc(&view, &mut native);
    assert_eq!(native.format, Format::B8G8R8A8UnormSrgb as u32);
    assert_eq!(native.dimension, pre_initialized);
}

#[test]
fn unknown_view_keeps_pre_initialized_uav1_plane_slice() {
    let pre_initialized = desc::Uav1Dimension::Texture2d {
        mip_slice: 2,
        plane_slice: 1,
    };
    let mut native = desc::UnorderedAccessViewDesc1 {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: pre_initialized,
    };
    let view = ResourceViewDesc {
        ty: ResourceViewType::Unknown,
        format: Format::R8G8B8A8Typeless,
    };
    convert::view_to_uav1_desc(&view, &mut native);
    assert_eq!(native.format, Format::R8G8B8A8Typeless as u32);
    assert_eq!(native.dimension, pre_initialized);
}

#[test]
fn view_format_outside_the_table_reads_back_as_unknown() {
    // 103 sits in the DXGI video format range.
    let native = desc::ShaderResourceViewDesc {
        format: 103,
        dimension: desc::SrvDimension::Texture2d {
            most_detailed_mip: 0,
            mip_levels: 1,
        },
    };
    let back = convert::view_from_srv_desc(&native);
    assert_eq!(back.format, Format::Unknown);
}

#[test]
fn multisampled_srv_reads_back_with_empty_ranges() {
    let native = desc::ShaderResourceViewDesc {
        format: Format::R8G8B8A8Unorm as u32,
        dimension: desc::SrvDimension::Texture2dMs,
    };
    let back = convert::view_from_srv_desc(&native);
    assert_eq!(
        back.ty,
        ResourceViewType::Texture2dMultisample(texture_view(0, 0, 0, 0))
    );
}

#[test]
fn dsv_read_back_reports_a_single_mip_level() {
    let native = desc::DepthStencilViewDesc {
        format: Format::D16Unorm as u32,
        flags: desc::DsvFlags::empty(),
        dimension: desc::DsvDimension::Texture1d { mip_slice: 3 },
    };
    let back = convert::view_from_dsv_desc(&native);
    assert_eq!(back.ty, ResourceViewType::Texture1d(texture_view(3, 1, 0, 0)));
}
