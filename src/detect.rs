use crate::prelude::*;

use rand::Rng;

/// The detection collaborator. Implementations turn opaque image data into a
/// cube state. Nothing here looks at pixels yet; both implementations are
/// stand-ins until real sticker-color detection lands.
pub trait Detect {
    fn detect(&self, image: &str) -> CubeState;
}

/// Always reports the same state, whatever the image shows.
pub struct FixedDetector(pub CubeState);

impl Detect for FixedDetector {
    fn detect(&self, _image: &str) -> CubeState {
        self.0.clone()
    }
}

/// Reports a uniformly random sticker for every position. The result is a
/// well-formed state string, not necessarily a reachable cube.
pub struct RandomDetector;

impl Detect for RandomDetector {
    fn detect(&self, _image: &str) -> CubeState {
        let faces: Vec<Face> = enum_iterator::all().collect();
        let mut rng = rand::thread_rng();
        CubeState::from_faces(std::array::from_fn(|_| {
            faces[rng.gen_range(0..faces.len())]
        }))
    }
}
