use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y (top-left), width, height in pixels
    pub tint: [f32; 4],      // rgba
}

/// Growable per-frame instance buffer
pub struct InstanceBuffer {
    pub buffer: Buffer,
    pub capacity: usize,
    pub len: u32,
}

impl InstanceBuffer {
    pub fn new(device: &Device, capacity: usize) -> Self {
        let buffer = device.create_buffer(&BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity,
            len: 0,
        }
    }

    /// Replace the contents, reallocating when the frame needs more room
    pub fn upload(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        let capacity = grown_capacity(self.capacity, instances.len());
        if capacity != self.capacity {
            log::debug!("Growing instance buffer {} -> {}", self.capacity, capacity);
            *self = Self::new(device, capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        self.len = instances.len() as u32;
    }
}

/// Capacity needed to hold `needed` instances, never shrinking
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two()
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: InstanceBuffer,
}

pub const INITIAL_INSTANCE_CAPACITY: usize = 1024;

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: InstanceBuffer::new(device, INITIAL_INSTANCE_CAPACITY),
    }
}
