//! Metric extraction: exercise + landmark frame -> named scalar features.
//!
//! Extraction is a pure function of the active exercise and the 33-point
//! frame. Each family reads a fixed handful of landmark indices and converts
//! them into named angles or vertical-distance magnitudes; a few exercises
//! add one family-specific metric on top.

use fitform_core::{
    angle_deg, landmark, metric, vertical_gap, Exercise, ExerciseFamily, MetricSet, PoseFrame,
};

/// Extracts the metric set for one frame.
///
/// The frame must be complete (at least 33 landmarks); the analyzer rejects
/// shorter frames before extraction.
#[must_use]
pub fn extract(exercise: Exercise, frame: &PoseFrame) -> MetricSet {
    let mut metrics = MetricSet::new();

    match exercise.family() {
        ExerciseFamily::Squat => {
            let hip = frame.point(landmark::RIGHT_HIP);
            let knee = frame.point(landmark::RIGHT_KNEE);
            let ankle = frame.point(landmark::RIGHT_ANKLE);
            metrics.insert(metric::KNEE_ANGLE, angle_deg(hip, knee, ankle));
            metrics.insert(metric::HIP_TO_GROUND, vertical_gap(hip, ankle));
            if exercise == Exercise::Burpee {
                let shoulder = frame.point(landmark::RIGHT_SHOULDER);
                metrics.insert(
                    metric::BODY_ALIGNMENT_ANGLE,
                    angle_deg(shoulder, hip, ankle),
                );
            }
        }
        ExerciseFamily::PushRow => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let elbow = frame.point(landmark::RIGHT_ELBOW);
            let wrist = frame.point(landmark::RIGHT_WRIST);
            let hip = frame.point(landmark::RIGHT_HIP);
            let ankle = frame.point(landmark::RIGHT_ANKLE);
            metrics.insert(metric::ELBOW_ANGLE, angle_deg(shoulder, elbow, wrist));
            metrics.insert(
                metric::BODY_ALIGNMENT_ANGLE,
                angle_deg(shoulder, hip, ankle),
            );
        }
        ExerciseFamily::HipHinge => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let hip = frame.point(landmark::RIGHT_HIP);
            let knee = frame.point(landmark::RIGHT_KNEE);
            metrics.insert(metric::HIP_ANGLE, angle_deg(shoulder, hip, knee));
            metrics.insert(metric::HIP_HEIGHT, vertical_gap(hip, shoulder));
        }
        ExerciseFamily::KneeDrive => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let knee = frame.point(landmark::RIGHT_KNEE);
            metrics.insert(
                metric::KNEE_TO_SHOULDER_DISTANCE,
                vertical_gap(knee, shoulder),
            );
        }
        ExerciseFamily::TrunkFlexion => {
            let shoulder = frame.point(landmark::LEFT_SHOULDER);
            let hip = frame.point(landmark::RIGHT_HIP);
            let knee = frame.point(landmark::RIGHT_KNEE);
            metrics.insert(metric::KNEE_TO_ELBOW_DISTANCE, vertical_gap(knee, shoulder));
            metrics.insert(
                metric::TORSO_ANGLE,
                angle_deg(shoulder, hip, frame.point(landmark::RIGHT_SHOULDER)),
            );
        }
        ExerciseFamily::PosteriorChain => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let hip = frame.point(landmark::RIGHT_HIP);
            let knee = frame.point(landmark::RIGHT_KNEE);
            metrics.insert(metric::HIP_ANGLE, angle_deg(shoulder, hip, knee));
            if exercise == Exercise::BirdDog {
                metrics.insert(
                    metric::HIP_ROTATION_ANGLE,
                    vertical_gap(
                        frame.point(landmark::LEFT_HIP),
                        frame.point(landmark::RIGHT_HIP),
                    ),
                );
            }
            if exercise == Exercise::SingleLegDeadlift {
                metrics.insert(
                    metric::BACK_ANGLE,
                    angle_deg(shoulder, hip, frame.point(landmark::LEFT_SHOULDER)),
                );
            }
        }
        ExerciseFamily::JumpingJack => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let left_hip = frame.point(landmark::LEFT_HIP);
            let right_hip = frame.point(landmark::RIGHT_HIP);
            metrics.insert(
                metric::HIP_ABDUCTION_ANGLE,
                angle_deg(left_hip, shoulder, right_hip),
            );
        }
        ExerciseFamily::BodyLineHold => {
            let shoulder = frame.point(landmark::RIGHT_SHOULDER);
            let hip = frame.point(landmark::RIGHT_HIP);
            let ankle = frame.point(landmark::RIGHT_ANKLE);
            metrics.insert(
                metric::BODY_ALIGNMENT_ANGLE,
                angle_deg(shoulder, hip, ankle),
            );
        }
        ExerciseFamily::WallSit => {
            let hip = frame.point(landmark::RIGHT_HIP);
            let knee = frame.point(landmark::RIGHT_KNEE);
            let ankle = frame.point(landmark::RIGHT_ANKLE);
            metrics.insert(metric::KNEE_ANGLE, angle_deg(hip, knee, ankle));
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fitform_core::Point2;

    /// A frame with every landmark at the origin except the ones set.
    fn frame_with(points: &[(usize, Point2)]) -> PoseFrame {
        let mut all = vec![Point2::default(); 33];
        for &(index, point) in points {
            all[index] = point;
        }
        PoseFrame::new(all)
    }

    #[test]
    fn squat_produces_knee_angle_and_hip_to_ground() {
        let frame = frame_with(&[
            (landmark::RIGHT_HIP, Point2::new(100.0, 100.0)),
            (landmark::RIGHT_KNEE, Point2::new(100.0, 200.0)),
            (landmark::RIGHT_ANKLE, Point2::new(100.0, 300.0)),
        ]);
        let metrics = extract(Exercise::Squat, &frame);

        assert_relative_eq!(metrics.get(metric::KNEE_ANGLE).unwrap(), 180.0, epsilon = 0.5);
        assert_relative_eq!(metrics.get(metric::HIP_TO_GROUND).unwrap(), 200.0);
        assert!(!metrics.contains(metric::BODY_ALIGNMENT_ANGLE));
    }

    #[test]
    fn burpee_adds_body_alignment() {
        let frame = frame_with(&[
            (landmark::RIGHT_SHOULDER, Point2::new(100.0, 50.0)),
            (landmark::RIGHT_HIP, Point2::new(100.0, 100.0)),
            (landmark::RIGHT_KNEE, Point2::new(100.0, 200.0)),
            (landmark::RIGHT_ANKLE, Point2::new(100.0, 300.0)),
        ]);
        let metrics = extract(Exercise::Burpee, &frame);
        assert!(metrics.contains(metric::BODY_ALIGNMENT_ANGLE));
    }

    #[test]
    fn pushup_produces_elbow_and_alignment() {
        let frame = frame_with(&[
            (landmark::RIGHT_SHOULDER, Point2::new(0.0, 0.0)),
            (landmark::RIGHT_ELBOW, Point2::new(50.0, 0.0)),
            (landmark::RIGHT_WRIST, Point2::new(50.0, 50.0)),
            (landmark::RIGHT_HIP, Point2::new(10.0, 20.0)),
            (landmark::RIGHT_ANKLE, Point2::new(20.0, 40.0)),
        ]);
        let metrics = extract(Exercise::Pushup, &frame);

        assert_relative_eq!(metrics.get(metric::ELBOW_ANGLE).unwrap(), 90.0, epsilon = 0.5);
        assert!(metrics.contains(metric::BODY_ALIGNMENT_ANGLE));
        assert_eq!(metrics.len(), 2);
    }

    #[test]
    fn bird_dog_adds_hip_rotation() {
        let frame = frame_with(&[
            (landmark::RIGHT_SHOULDER, Point2::new(0.0, 0.0)),
            (landmark::LEFT_HIP, Point2::new(100.0, 108.0)),
            (landmark::RIGHT_HIP, Point2::new(100.0, 100.0)),
            (landmark::RIGHT_KNEE, Point2::new(150.0, 100.0)),
        ]);
        let metrics = extract(Exercise::BirdDog, &frame);

        assert!(metrics.contains(metric::HIP_ANGLE));
        assert_relative_eq!(metrics.get(metric::HIP_ROTATION_ANGLE).unwrap(), 8.0);
        assert!(!metrics.contains(metric::BACK_ANGLE));
    }

    #[test]
    fn single_leg_deadlift_adds_back_angle() {
        let frame = frame_with(&[
            (landmark::LEFT_SHOULDER, Point2::new(10.0, 5.0)),
            (landmark::RIGHT_SHOULDER, Point2::new(0.0, 0.0)),
            (landmark::RIGHT_HIP, Point2::new(100.0, 100.0)),
            (landmark::RIGHT_KNEE, Point2::new(150.0, 100.0)),
        ]);
        let metrics = extract(Exercise::SingleLegDeadlift, &frame);
        assert!(metrics.contains(metric::BACK_ANGLE));
        assert!(!metrics.contains(metric::HIP_ROTATION_ANGLE));
    }

    #[test]
    fn wall_sit_produces_knee_angle_only() {
        let frame = frame_with(&[
            (landmark::RIGHT_HIP, Point2::new(0.0, 100.0)),
            (landmark::RIGHT_KNEE, Point2::new(50.0, 100.0)),
            (landmark::RIGHT_ANKLE, Point2::new(50.0, 150.0)),
        ]);
        let metrics = extract(Exercise::WallSit, &frame);
        assert_relative_eq!(metrics.get(metric::KNEE_ANGLE).unwrap(), 90.0, epsilon = 0.5);
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn knee_drive_is_a_distance() {
        let frame = frame_with(&[
            (landmark::RIGHT_SHOULDER, Point2::new(0.0, 50.0)),
            (landmark::RIGHT_KNEE, Point2::new(0.0, 230.0)),
        ]);
        let metrics = extract(Exercise::MountainClimber, &frame);
        assert_relative_eq!(
            metrics.get(metric::KNEE_TO_SHOULDER_DISTANCE).unwrap(),
            180.0
        );
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn jumping_jack_measures_hip_abduction() {
        let frame = frame_with(&[
            (landmark::RIGHT_SHOULDER, Point2::new(0.0, 0.0)),
            (landmark::LEFT_HIP, Point2::new(-30.0, 100.0)),
            (landmark::RIGHT_HIP, Point2::new(30.0, 100.0)),
        ]);
        let metrics = extract(Exercise::JumpingJack, &frame);
        assert!(metrics.get(metric::HIP_ABDUCTION_ANGLE).unwrap() > 0.0);
        assert_eq!(metrics.len(), 1);
    }
}
