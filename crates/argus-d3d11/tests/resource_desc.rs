use argus_api::{
    BufferDesc, Format, MemoryHeap, ResourceDesc, ResourceType, ResourceUsage, TextureDesc,
};
use argus_d3d11::convert;
use argus_d3d11::desc;

#[test]
fn memory_heap_splits_into_usage_and_cpu_access() {
    let cases = [
        (
            MemoryHeap::GpuOnly,
            desc::Usage::Default,
            desc::CpuAccessFlags::empty(),
        ),
        (
            MemoryHeap::CpuToGpu,
            desc::Usage::Dynamic,
            desc::CpuAccessFlags::WRITE,
        ),
        (
            MemoryHeap::GpuToCpu,
            desc::Usage::Staging,
            desc::CpuAccessFlags::READ,
        ),
        (
            MemoryHeap::CpuOnly,
            desc::Usage::Staging,
            desc::CpuAccessFlags::READ | desc::CpuAccessFlags::WRITE,
        ),
    ];
    for (heap, expected_usage, expected_access) in cases {
        let mut usage = desc::Usage::Default;
        let mut access = desc::CpuAccessFlags::empty();
        convert::memory_heap_to_d3d_usage(heap, &mut usage, &mut access);
        assert_eq!(usage, expected_usage, "{heap:?}");
        assert_eq!(access, expected_access, "{heap:?}");
    }
}

#[test]
fn memory_heap_ors_into_existing_cpu_access_bits() {
    let mut usage = desc::Usage::Default;
    let mut access = desc::CpuAccessFlags::WRITE;
    convert::memory_heap_to_d3d_usage(MemoryHeap::GpuToCpu, &mut usage, &mut access);
    assert_eq!(
        access,
        desc::CpuAccessFlags::READ | desc::CpuAccessFlags::WRITE
    );
}

#[test]
fn d3d_usage_coarsens_to_memory_heap() {
    assert_eq!(
        convert::d3d_usage_to_memory_heap(desc::Usage::Default),
        MemoryHeap::GpuOnly
    );
    assert_eq!(
        convert::d3d_usage_to_memory_heap(desc::Usage::Immutable),
        MemoryHeap::GpuOnly
    );
    assert_eq!(
        convert::d3d_usage_to_memory_heap(desc::Usage::Dynamic),
        MemoryHeap::CpuToGpu
    );
    assert_eq!(
        convert::d3d_usage_to_memory_heap(desc::Usage::Staging),
        MemoryHeap::GpuToCpu
    );
}

const MAPPED_USAGE_BITS: [ResourceUsage; 7] = [
    ResourceUsage::RENDER_TARGET,
    ResourceUsage::DEPTH_STENCIL,
    ResourceUsage::SHADER_RESOURCE,
    ResourceUsage::UNORDERED_ACCESS,
    ResourceUsage::INDEX_BUFFER,
    ResourceUsage::VERTEX_BUFFER,
    ResourceUsage::CONSTANT_BUFFER,
];

#[test]
fn bind_flag_mapping_round_trips_every_subset() {
    for mask in 0u32..(1 << MAPPED_USAGE_BITS.len()) {
        let mut usage = ResourceUsage::empty();
        for (i, bit) in MAPPED_USAGE_BITS.iter().enumerate() {
            if mask & (1 << i) != 0 {
                usage |= *bit;
            }
        }
        let mut bind_flags = desc::BindFlags::empty();
        convert::resource_usage_to_bind_flags(usage, &mut bind_flags);
        let back = convert::bind_flags_to_resource_usage(bind_flags);
        assert_eq!(
            back,
            usage | ResourceUsage::COPY_SOURCE | ResourceUsage::COPY_DEST,
            "mask {mask:#b}"
        );
    }
}

#[test]
fn bind_flag_values_match_d3d11() {
    let mut bind_flags = desc::BindFlags::empty();
    convert::resource_usage_to_bind_flags(
        ResourceUsage::VERTEX_BUFFER | ResourceUsage::RENDER_TARGET,
        &mut bind_flags,
    );
    assert_eq!(bind_flags.bits(), 0x1 | 0x20);
}

#[test]
fn forward_bind_flag_mapping_clears_stale_bits_and_keeps_unmapped_ones() {
    let mut bind_flags =
        desc::BindFlags::DEPTH_STENCIL | desc::BindFlags::STREAM_OUTPUT | desc::BindFlags::DECODER;
    convert::resource_usage_to_bind_flags(ResourceUsage::SHADER_RESOURCE, &mut bind_flags);
    assert_eq!(
        bind_flags,
        desc::BindFlags::SHADER_RESOURCE | desc::BindFlags::STREAM_OUTPUT | desc::BindFlags::DECODER
    );
}

#[test]
fn reverse_bind_flag_mapping_always_reports_copy_usage() {
    assert_eq!(
        convert::bind_flags_to_resource_usage(desc::BindFlags::empty()),
        ResourceUsage::COPY_SOURCE | ResourceUsage::COPY_DEST
    );
}

#[test]
fn buffer_desc_round_trip() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Buffer(BufferDesc { size: 65536 }),
        heap: MemoryHeap::CpuToGpu,
        usage: ResourceUsage::CONSTANT_BUFFER,
    };
    let mut native = desc::BufferDesc::default();
    convert::resource_to_buffer_desc(&abstract_desc, &mut native);
    assert_eq!(native.byte_width, 65536);
    assert_eq!(native.usage, desc::Usage::Dynamic);
    assert_eq!(native.bind_flags, desc::BindFlags::CONSTANT_BUFFER);
    assert_eq!(native.cpu_access_flags, desc::CpuAccessFlags::WRITE);

    let back = convert::resource_from_buffer_desc(&native);
    assert_eq!(back.ty, abstract_desc.ty);
    assert_eq!(back.heap, abstract_desc.heap);
    assert_eq!(
        back.usage,
        abstract_desc.usage | ResourceUsage::COPY_SOURCE | ResourceUsage::COPY_DEST
    );
}

#[test]
fn buffer_conversion_leaves_stride_and_misc_flags_alone() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Buffer(BufferDesc { size: 256 }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::UNORDERED_ACCESS,
    };
    let mut native = desc::BufferDesc {
        misc_flags: 0x40,
        structure_byte_stride: 16,
        ..Default::default()
    };
    convert::resource_to_buffer_desc(&abstract_desc, &mut native);
    assert_eq!(native.misc_flags, 0x40);
    assert_eq!(native.structure_byte_stride, 16);
}

#[test]
#[should_panic(expected = "32-bit")]
fn buffer_size_above_u32_is_rejected() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Buffer(BufferDesc {
            size: u64::from(u32::MAX) + 1,
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::empty(),
    };
    let mut native = desc::BufferDesc::default();
    convert::resource_to_buffer_desc(&abstract_desc, &mut native);
}

#[test]
#[should_panic(expected = "buffer resource")]
fn buffer_conversion_rejects_texture_resources() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture2d(TextureDesc::default()),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::empty(),
    };
    let mut native = desc::BufferDesc::default();
    convert::resource_to_buffer_desc(&abstract_desc, &mut native);
}

#[test]
fn texture1d_desc_round_trip() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture1d(TextureDesc {
            width: 512,
            height: 1,
            depth_or_layers: 4,
            levels: 10,
            format: Format::R8Unorm,
            samples: 1,
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::SHADER_RESOURCE,
    };
    let mut native = desc::Texture1dDesc::default();
    convert::resource_to_texture1d_desc(&abstract_desc, &mut native);
    assert_eq!(native.width, 512);
    assert_eq!(native.mip_levels, 10);
    assert_eq!(native.array_size, 4);
    assert_eq!(native.format, Format::R8Unorm as u32);

    let back = convert::resource_from_texture1d_desc(&native);
    assert_eq!(back.ty, abstract_desc.ty);
    assert_eq!(back.heap, abstract_desc.heap);
}

#[test]
#[should_panic(expected = "unit height")]
fn texture1d_conversion_rejects_nonunit_height() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture1d(TextureDesc {
            height: 2,
            ..Default::default()
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::empty(),
    };
    let mut native = desc::Texture1dDesc::default();
    convert::resource_to_texture1d_desc(&abstract_desc, &mut native);
}

#[test]
fn texture2d_desc_round_trip_adds_resolve_dest_when_single_sampled() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture2d(TextureDesc {
            width: 1920,
            height: 1080,
            depth_or_layers: 1,
            levels: 1,
            format: Format::B8G8R8A8Unorm,
            samples: 1,
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::RENDER_TARGET | ResourceUsage::SHADER_RESOURCE,
    };
    let mut native = desc::Texture2dDesc::default();
    convert::resource_to_texture2d_desc(&abstract_desc, &mut native);
    assert_eq!(native.width, 1920);
    assert_eq!(native.height, 1080);
    assert_eq!(native.sample_desc.count, 1);
    assert_eq!(
        native.bind_flags,
        desc::BindFlags::RENDER_TARGET | desc::BindFlags::SHADER_RESOURCE
    );

    let back = convert::resource_from_texture2d_desc(&native);
    assert_eq!(back.ty, abstract_desc.ty);
    assert_eq!(
        back.usage,
        abstract_desc.usage
            | ResourceUsage::COPY_SOURCE
            | ResourceUsage::COPY_DEST
            | ResourceUsage::RESOLVE_DEST
    );
}

#[test]
fn multisampled_texture2d_reads_back_as_resolve_source() {
    let native = desc::Texture2dDesc {
        width: 1280,
        height: 720,
        mip_levels: 1,
        array_size: 1,
        format: Format::R16G16B16A16Float as u32,
        sample_desc: desc::SampleDesc {
            count: 4,
            quality: 0,
        },
        bind_flags: desc::BindFlags::RENDER_TARGET,
        ..Default::default()
    };
    let back = convert::resource_from_texture2d_desc(&native);
    let ResourceType::Texture2d(texture) = back.ty else {
        panic!("expected a 2D texture");
    };
    assert_eq!(texture.samples, 4);
    assert!(back.usage.contains(ResourceUsage::RESOLVE_SOURCE));
    assert!(!back.usage.contains(ResourceUsage::RESOLVE_DEST));
}

#[test]
fn texture2d_sample_quality_is_left_alone() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture2d(TextureDesc {
            samples: 8,
            ..Default::default()
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::RENDER_TARGET,
    };
    let mut native = desc::Texture2dDesc {
        sample_desc: desc::SampleDesc {
            count: 1,
            quality: 2,
        },
        ..Default::default()
    };
    convert::resource_to_texture2d_desc(&abstract_desc, &mut native);
    assert_eq!(native.sample_desc.count, 8);
    assert_eq!(native.sample_desc.quality, 2);
}

#[test]
#[should_panic(expected = "16-bit layer count")]
fn texture2d_array_size_above_u16_is_rejected() {
    let native = desc::Texture2dDesc {
        array_size: 0x1_0000,
        ..Default::default()
    };
    convert::resource_from_texture2d_desc(&native);
}

#[test]
fn texture3d_desc_round_trip() {
    let abstract_desc = ResourceDesc {
        ty: ResourceType::Texture3d(TextureDesc {
            width: 64,
            height: 64,
            depth_or_layers: 32,
            levels: 7,
            format: Format::R32Float,
            samples: 1,
        }),
        heap: MemoryHeap::GpuOnly,
        usage: ResourceUsage::SHADER_RESOURCE | ResourceUsage::UNORDERED_ACCESS,
    };
    let mut native = desc::Texture3dDesc::default();
    convert::resource_to_texture3d_desc(&abstract_desc, &mut native);
    assert_eq!(native.depth, 32);
    assert_eq!(native.mip_levels, 7);

    let back = convert::resource_from_texture3d_desc(&native);
    assert_eq!(back.ty, abstract_desc.ty);
}

#[test]
fn unrepresentable_format_values_read_back_as_unknown() {
    // 130 sits in the DXGI video format range.
    let native = desc::Texture2dDesc {
        width: 16,
        height: 16,
        mip_levels: 1,
        array_size: 1,
        format: 130,
        ..Default::default()
    };
    let back = convert::resource_from_texture2d_desc(&native);
    let ResourceType::Texture2d(texture) = back.ty else {
        panic!("expected a 2D texture");
    };
    assert_eq!(texture.format, Format::Unknown);
}
