use glam::{Mat4, Vec3, Vec4Swizzles};

/// World-space ray with a normalized direction.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Unproject a screen point through the inverse view-projection into a
    /// world ray. `x`/`y` are window pixels with the origin at the top left.
    pub fn from_screen(x: f32, y: f32, width: f32, height: f32, view_proj: &Mat4) -> Ray {
        let ndc_x = 2.0 * x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height;

        let inv = view_proj.inverse();
        let near = inv * glam::Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * glam::Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        Ray::new(near, far - near)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Slab test. Returns the entry distance, the exit distance when the origin
/// is inside the box, or -1.0 on a miss.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> f32 {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero components so the division cannot blow up
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON {
            1.0 / EPSILON.copysign(ray_dir.x)
        } else {
            1.0 / ray_dir.x
        },
        if ray_dir.y.abs() < EPSILON {
            1.0 / EPSILON.copysign(ray_dir.y)
        } else {
            1.0 / ray_dir.y
        },
        if ray_dir.z.abs() < EPSILON {
            1.0 / EPSILON.copysign(ray_dir.z)
        } else {
            1.0 / ray_dir.z
        },
    );

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return -1.0;
    }

    if t_near < 0.0 {
        if t_far > 0.001 {
            t_far
        } else {
            -1.0
        }
    } else {
        t_near
    }
}
