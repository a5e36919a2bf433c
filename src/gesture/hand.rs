use super::*;
use crate::Fingers;
use crate::LANDMARK_COUNT;

/// Count the raised fingers of one detected hand.
///
/// The thumb folds sideways, so it is judged on the x axis: in the mirrored
/// camera view a right thumb is out when its tip is left of its IP joint, a
/// left thumb when the tip is to the right. The other four fingers are out
/// when the tip is strictly above the PIP joint. Ties count as folded.
pub fn classify(landmarks: &[Landmark; LANDMARK_COUNT], handedness: Handedness) -> Fingers {
    Finger::all()
        .into_iter()
        .filter(|finger| extended(landmarks, handedness, *finger))
        .count() as Fingers
}

fn extended(
    landmarks: &[Landmark; LANDMARK_COUNT],
    handedness: Handedness,
    finger: Finger,
) -> bool {
    let tip = &landmarks[finger.tip()];
    let joint = &landmarks[finger.joint()];
    match (finger, handedness) {
        (Finger::Thumb, Handedness::Right) => tip.left_of(joint),
        (Finger::Thumb, Handedness::Left) => tip.right_of(joint),
        _ => tip.above(joint),
    }
}

/// One frame's worth of hand landmarks plus the handedness label.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARK_COUNT],
    handedness: Handedness,
}

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT], handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }
    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }
    pub fn extended(&self, finger: Finger) -> bool {
        extended(&self.landmarks, self.handedness, finger)
    }
    pub fn fingers(&self) -> Fingers {
        classify(&self.landmarks, self.handedness)
    }
}

impl TryFrom<(Vec<Landmark>, Handedness)> for Hand {
    type Error = String;
    fn try_from(
        (landmarks, handedness): (Vec<Landmark>, Handedness),
    ) -> Result<Self, Self::Error> {
        let n = landmarks.len();
        landmarks
            .try_into()
            .map(|landmarks| Self::new(landmarks, handedness))
            .map_err(|_| format!("expected {} landmarks, got {}", LANDMARK_COUNT, n))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hand, wrist={} fingers={}",
            self.handedness,
            self.landmarks[0],
            self.fingers()
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A fist: every tip sits below its joint and level with it on x.
    pub(crate) fn fist() -> [Landmark; LANDMARK_COUNT] {
        let mut landmarks = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        for finger in Finger::all() {
            landmarks[finger.joint()] = Landmark::new(0.5, 0.5);
            landmarks[finger.tip()] = Landmark::new(0.5, 0.7);
        }
        landmarks
    }

    /// Raise exactly the given fingers of a hand.
    pub(crate) fn raise(handedness: Handedness, fingers: &[Finger]) -> Hand {
        let mut landmarks = fist();
        for finger in fingers {
            let joint = landmarks[finger.joint()];
            landmarks[finger.tip()] = match (finger, handedness) {
                (Finger::Thumb, Handedness::Right) => Landmark::new(joint.x - 0.1, joint.y),
                (Finger::Thumb, Handedness::Left) => Landmark::new(joint.x + 0.1, joint.y),
                _ => Landmark::new(joint.x, joint.y - 0.2),
            };
        }
        Hand::new(landmarks, handedness)
    }

    /// A hand showing `n` fingers, thumb first.
    pub(crate) fn showing(n: Fingers) -> Hand {
        let fingers = Finger::all();
        raise(Handedness::Right, &fingers[..n as usize])
    }

    #[test]
    fn fist_counts_zero() {
        assert_eq!(classify(&fist(), Handedness::Left), 0);
        assert_eq!(classify(&fist(), Handedness::Right), 0);
    }

    #[test]
    fn open_palm_counts_five() {
        for h in [Handedness::Left, Handedness::Right] {
            assert_eq!(raise(h, &Finger::all()).fingers(), 5);
        }
    }

    #[test]
    fn thumb_direction_flips_with_handedness() {
        let mut landmarks = fist();
        landmarks[Finger::Thumb.joint()] = Landmark::new(0.50, 0.5);
        landmarks[Finger::Thumb.tip()] = Landmark::new(0.40, 0.5);
        assert_eq!(classify(&landmarks, Handedness::Right), 1);
        assert_eq!(classify(&landmarks, Handedness::Left), 0);
        landmarks[Finger::Thumb.tip()] = Landmark::new(0.60, 0.5);
        assert_eq!(classify(&landmarks, Handedness::Right), 0);
        assert_eq!(classify(&landmarks, Handedness::Left), 1);
    }

    #[test]
    fn thumb_ignores_vertical_position() {
        let mut landmarks = fist();
        landmarks[Finger::Thumb.joint()] = Landmark::new(0.5, 0.5);
        landmarks[Finger::Thumb.tip()] = Landmark::new(0.4, 0.1);
        assert_eq!(classify(&landmarks, Handedness::Right), 1);
        landmarks[Finger::Thumb.tip()] = Landmark::new(0.4, 0.9);
        assert_eq!(classify(&landmarks, Handedness::Right), 1);
    }

    #[test]
    fn level_tip_is_folded() {
        let mut landmarks = fist();
        for finger in &Finger::all()[1..] {
            landmarks[finger.tip()] = landmarks[finger.joint()];
        }
        landmarks[Finger::Thumb.tip()] = landmarks[Finger::Thumb.joint()];
        assert_eq!(classify(&landmarks, Handedness::Left), 0);
        assert_eq!(classify(&landmarks, Handedness::Right), 0);
    }

    #[test]
    fn fingers_ignore_horizontal_position() {
        let mut landmarks = fist();
        let joint = landmarks[Finger::Ring.joint()];
        landmarks[Finger::Ring.tip()] = Landmark::new(joint.x + 0.3, joint.y - 0.01);
        assert_eq!(classify(&landmarks, Handedness::Left), 1);
        assert_eq!(classify(&landmarks, Handedness::Right), 1);
    }

    #[test]
    fn counts_each_subset() {
        let all = Finger::all();
        for mask in 0u8..32 {
            let raised = all
                .iter()
                .copied()
                .filter(|f| mask & (1 << *f as u8) != 0)
                .collect::<Vec<_>>();
            let hand = raise(Handedness::Left, &raised);
            assert_eq!(hand.fingers() as u32, mask.count_ones());
            for finger in all {
                assert_eq!(hand.extended(finger), raised.contains(&finger));
            }
        }
    }

    #[test]
    fn rejects_short_landmark_sets() {
        let short = vec![Landmark::default(); 20];
        assert!(Hand::try_from((short, Handedness::Left)).is_err());
        let full = vec![Landmark::default(); LANDMARK_COUNT];
        assert!(Hand::try_from((full, Handedness::Left)).is_ok());
    }
}
