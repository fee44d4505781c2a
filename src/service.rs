use crate::prelude::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub steps: Vec<String>,
}

/// Everything a request can fail with. All of these mean bad input or a
/// collaborator saying no; none are internal faults.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no image provided")]
    NoImage,

    #[error(transparent)]
    BadState(#[from] StateError),

    #[error("failed to solve cube: {0:#}")]
    Solver(anyhow::Error),
}

/// The two operations the backend exposes, independent of any transport.
/// A routing layer hands each request body to the matching method and
/// serializes whatever comes back.
pub struct Service<D, S> {
    detector: D,
    solver: S,
}

impl<D: Detect, S: Solve> Service<D, S> {
    pub fn new(detector: D, solver: S) -> Service<D, S> {
        Service { detector, solver }
    }

    pub fn detect(&self, request: DetectRequest) -> Result<DetectResponse, ServiceError> {
        if request.image.is_empty() {
            return Err(ServiceError::NoImage);
        }

        let state = self.detector.detect(&request.image);
        log::info!("detected state {}", state);

        Ok(DetectResponse {
            state: state.to_string(),
        })
    }

    pub fn solve(&self, request: SolveRequest) -> Result<SolveResponse, ServiceError> {
        let state: CubeState = request.state.parse()?;
        log::info!("solving {}", state);

        let moves = self.solver.solve(&state).map_err(ServiceError::Solver)?;
        log::info!("solved in {} moves", moves.len());

        Ok(SolveResponse {
            steps: moves.iter().map(Move::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    struct CannedSolver(&'static str);

    impl Solve for CannedSolver {
        fn solve(&self, _state: &CubeState) -> anyhow::Result<Vec<Move>> {
            Move::parse_sequence(self.0)
        }
    }

    struct FailingSolver;

    impl Solve for FailingSolver {
        fn solve(&self, _state: &CubeState) -> anyhow::Result<Vec<Move>> {
            Err(anyhow::anyhow!("ERROR: probably unsolvable"))
        }
    }

    fn service<S: Solve>(solver: S) -> Service<FixedDetector, S> {
        Service::new(FixedDetector(state(&solved_faces())), solver)
    }

    #[test]
    fn solve_returns_move_tokens() {
        let response = service(CannedSolver("R U R' U'"))
            .solve(SolveRequest {
                state: format!(
                    "{}{}{}{}{}{}",
                    "W".repeat(9),
                    "R".repeat(9),
                    "G".repeat(9),
                    "O".repeat(9),
                    "B".repeat(9),
                    "Y".repeat(9),
                ),
            })
            .unwrap();

        assert_eq!(response.steps, vec!["R", "U", "R'", "U'"]);
    }

    #[test]
    fn solve_rejects_malformed_states() {
        let err = service(CannedSolver("R"))
            .solve(SolveRequest {
                state: "UUU".to_string(),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::BadState(StateError::WrongLength {
                required: 54,
                actual: 3,
            }),
        ));
    }

    #[test]
    fn solver_failures_keep_their_message() {
        let err = service(FailingSolver)
            .solve(SolveRequest {
                state: solved_faces(),
            })
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("failed to solve cube:"), "{}", message);
        assert!(message.contains("ERROR: probably unsolvable"), "{}", message);
    }

    #[test]
    fn detect_requires_an_image() {
        let err = service(CannedSolver("R"))
            .detect(DetectRequest {
                image: String::new(),
            })
            .unwrap_err();

        assert!(matches!(err, ServiceError::NoImage));
    }

    #[test]
    fn detect_reports_the_detector_state() {
        let response = service(CannedSolver("R"))
            .detect(DetectRequest {
                image: "data:image/png;base64,aaaa".to_string(),
            })
            .unwrap();

        assert_eq!(response.state, solved_faces());
    }

    #[test]
    fn wire_format_uses_the_original_field_names() {
        let request: SolveRequest =
            serde_json::from_str(r#"{"state":"UUU"}"#).unwrap();
        assert_eq!(request.state, "UUU");

        let response = serde_json::to_value(SolveResponse {
            steps: vec!["R2".to_string()],
        })
        .unwrap();
        assert_eq!(response, serde_json::json!({ "steps": ["R2"] }));

        let request: DetectRequest =
            serde_json::from_str(r#"{"image":"aaaa"}"#).unwrap();
        assert_eq!(request.image, "aaaa");

        let response = serde_json::to_value(DetectResponse {
            state: solved_faces(),
        })
        .unwrap();
        assert_eq!(response, serde_json::json!({ "state": solved_faces() }));
    }
}
