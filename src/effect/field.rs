use super::config::EffectConfig;

/// Pixels between lattice anchors at `spacing = 1`, `points = 1`, `scale = 1`.
const LATTICE_UNIT: f64 = 40.0;
/// Pixels of link reach per unit of `max_distance`.
const DISTANCE_UNIT: f64 = 4.0;
/// Maximum parallax shift of the nearest layer, in unscaled px.
const PARALLAX: f64 = 20.0;
/// How quickly the parallax offset catches up with its target, per second.
const EASE_RATE: f64 = 4.0;
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    /// 1.0 for coincident points, fading to 0.0 at the link distance.
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: f64,
    y: f64,
    phase: f64,
    depth: f64,
}

/// The moving "net" drawn behind the hero: a jittering lattice of points
/// joined by lines whenever two points come close enough.
#[derive(Debug, Clone)]
pub struct NetField {
    config: EffectConfig,
    width: f64,
    height: f64,
    scale: f64,
    cols: usize,
    rows: usize,
    anchors: Vec<Anchor>,
    points: Vec<Point>,
    time: f64,
    target: (f64, f64),
    offset: (f64, f64),
}

impl NetField {
    pub fn new(config: EffectConfig, width: f64, height: f64) -> Self {
        let mut field = Self {
            config,
            width: 0.0,
            height: 0.0,
            scale: 1.0,
            cols: 0,
            rows: 0,
            anchors: Vec::new(),
            points: Vec::new(),
            time: 0.0,
            target: (0.0, 0.0),
            offset: (0.0, 0.0),
        };
        field.resize(width, height);
        field
    }

    /// Rebuild the lattice for a new container size. Sizes below the
    /// configured minimums are raised to them.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(self.config.min_width);
        self.height = height.max(self.config.min_height);
        self.scale = self.config.scale_for(width);

        let gap = self.gap();
        let cols = (self.width / gap).ceil() as usize + 1;
        let rows = (self.height / gap).ceil() as usize + 1;
        self.cols = cols;
        self.rows = rows;

        self.anchors = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .enumerate()
            .map(|(i, (r, c))| {
                let i = i as f64;
                Anchor {
                    x: c as f64 * gap,
                    y: r as f64 * gap,
                    phase: (i * GOLDEN_ANGLE) % std::f64::consts::TAU,
                    depth: 0.3 + 0.7 * (i * 0.618_034).fract(),
                }
            })
            .collect();
        self.points = self.anchors.iter().map(|a| Point { x: a.x, y: a.y }).collect();
        self.layout();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distance between neighbouring anchors:
    /// `spacing * scale * LATTICE_UNIT / max(points, 1)`.
    pub fn gap(&self) -> f64 {
        self.config.spacing * self.scale * LATTICE_UNIT / self.config.points.max(1.0)
    }

    /// Reach of a link: `max_distance * scale * DISTANCE_UNIT`.
    pub fn link_distance(&self) -> f64 {
        self.config.max_distance * self.scale * DISTANCE_UNIT
    }

    /// Feed a pointer position in container-local pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64, source: InputSource) {
        let enabled = match source {
            InputSource::Mouse => self.config.mouse_controls,
            InputSource::Touch => self.config.touch_controls,
        };
        if !enabled {
            return;
        }
        let nx = (x / self.width) * 2.0 - 1.0;
        let ny = (y / self.height) * 2.0 - 1.0;
        self.target = (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0));
    }

    pub fn clear_pointer(&mut self) {
        self.target = (0.0, 0.0);
    }

    /// Feed device orientation, in degrees, as reported by `deviceorientation`.
    pub fn set_tilt(&mut self, beta: f64, gamma: f64) {
        if !self.config.gyro_controls {
            return;
        }
        let nx = gamma / 45.0;
        let ny = (beta - 45.0) / 45.0;
        self.target = (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0));
    }

    /// Advance the animation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.time += dt;
        let ease = (dt * EASE_RATE).min(1.0);
        self.offset.0 += (self.target.0 - self.offset.0) * ease;
        self.offset.1 += (self.target.1 - self.offset.1) * ease;
        self.layout();
    }

    fn layout(&mut self) {
        let amp = self.config.amplitude * self.scale;
        let parallax = PARALLAX * self.scale;
        let t = self.time * self.config.speed;
        for (p, a) in self.points.iter_mut().zip(&self.anchors) {
            p.x = a.x + amp * (t + a.phase).sin() - self.offset.0 * parallax * a.depth;
            p.y = a.y + amp * (t * 0.8 + a.phase * 1.3).cos() - self.offset.1 * parallax * a.depth;
        }
    }

    /// Every pair of points closer than [`NetField::link_distance`].
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        self.links_into(&mut links);
        links
    }

    /// Like [`NetField::links`], reusing `out` across frames.
    ///
    /// Points never stray further than [`NetField::max_displacement`] from
    /// their anchors, so only anchors within a few lattice cells are compared.
    pub fn links_into(&self, out: &mut Vec<Link>) {
        out.clear();
        let reach = self.link_distance();
        let reach_sq = reach * reach;
        let radius = ((reach + 2.0 * self.max_displacement()) / self.gap()).ceil() as isize;
        let (cols, rows) = (self.cols as isize, self.rows as isize);

        for r in 0..rows {
            for c in 0..cols {
                let i = (r * cols + c) as usize;
                let a = self.points[i];
                for dr in 0..=radius {
                    let nr = r + dr;
                    if nr >= rows {
                        break;
                    }
                    // same row only looks right, so each pair is visited once
                    let first = if dr == 0 { 1 } else { -radius };
                    for dc in first..=radius {
                        let nc = c + dc;
                        if nc < 0 || nc >= cols {
                            continue;
                        }
                        let j = (nr * cols + nc) as usize;
                        let b = self.points[j];
                        let dx = a.x - b.x;
                        let dy = a.y - b.y;
                        let d_sq = dx * dx + dy * dy;
                        if d_sq < reach_sq {
                            out.push(Link {
                                from: i,
                                to: j,
                                alpha: 1.0 - d_sq.sqrt() / reach,
                            });
                        }
                    }
                }
            }
        }
    }

    /// Upper bound on how far any point sits from its anchor.
    pub fn max_displacement(&self) -> f64 {
        let amp = self.config.amplitude * self.scale;
        let parallax = PARALLAX * self.scale;
        (amp + parallax) * std::f64::consts::SQRT_2
    }
}

impl Link {
    /// Which of `buckets` equal opacity bands this link falls into, from
    /// faintest (0) to strongest (`buckets - 1`).
    pub fn bucket(&self, buckets: usize) -> usize {
        let buckets = buckets.max(1);
        ((self.alpha * buckets as f64).ceil() as usize).clamp(1, buckets) - 1
    }
}
