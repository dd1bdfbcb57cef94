/// Logical arena size of the collision demo, in demo pixels.
pub const ARENA_WIDTH: f32 = 300.0;
pub const ARENA_HEIGHT: f32 = 300.0;
/// Side length of the pointer-centered hitbox square.
pub const POINTER_SIZE: f32 = 40.0;

/// The fixed obstacle rectangle (x, y, width, height).
pub const OBSTACLE: Obstacle = Obstacle {
    x: 150.0,
    y: 80.0,
    w: 80.0,
    h: 140.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Hitbox demo: a pointer-centered square tested for axis-aligned overlap
/// against the fixed obstacle. Pointer-driven, no timer.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionViz {
    pub x: f32,
    pub y: f32,
    pub colliding: bool,
}

impl Default for CollisionViz {
    fn default() -> Self {
        let mut viz = Self {
            x: 50.0,
            y: 50.0,
            colliding: false,
        };
        viz.recompute();
        viz
    }
}

impl CollisionViz {
    /// Move the pointer by a delta, clamped to the arena, and recompute the
    /// overlap flag.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        self.set_pointer(self.x + dx, self.y + dy);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.x = x.clamp(0.0, ARENA_WIDTH);
        self.y = y.clamp(0.0, ARENA_HEIGHT);
        self.recompute();
    }

    /// Strict AABB overlap on both axes; touching edges do not collide.
    fn recompute(&mut self) {
        let half = POINTER_SIZE / 2.0;
        let left = self.x - half;
        let right = self.x + half;
        let top = self.y - half;
        let bottom = self.y + half;

        self.colliding = left < OBSTACLE.right()
            && right > OBSTACLE.left()
            && top < OBSTACLE.bottom()
            && bottom > OBSTACLE.top();
    }
}
