use super::*;
use crate::gesture::Hand;
use crate::gesture::Handedness;
use crate::gesture::Landmark;
use serde::Deserialize;

/// One landmark as written by the helper. Depth, if present, is ignored.
#[derive(Debug, Deserialize)]
struct Point {
    x: f32,
    y: f32,
}

#[derive(Debug, Deserialize)]
struct Detection {
    handedness: String,
    #[serde(default)]
    score: f32,
    landmarks: Vec<Point>,
}

/// One JSON line written by the detector helper per processed frame:
/// `{"captured": true, "hands": [{"handedness": "Right", "score": 0.9, "landmarks": [...]}]}`
#[derive(Debug, Deserialize)]
pub struct Reply {
    #[serde(default = "captured")]
    captured: bool,
    #[serde(default)]
    hands: Vec<Detection>,
    #[serde(default)]
    error: Option<String>,
}

fn captured() -> bool {
    true
}

impl TryFrom<&str> for Reply {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        use anyhow::Context;
        serde_json::from_str(line.trim())
            .with_context(|| format!("malformed detector reply: {}", line.trim()))
    }
}

/// Only the first reported hand is considered. A hand that cannot be read
/// counts as no hand rather than as a failed capture.
impl From<Reply> for Sample {
    fn from(reply: Reply) -> Self {
        if let Some(error) = reply.error {
            log::warn!("detector error: {}", error);
            return Self::Missing;
        }
        if !reply.captured {
            return Self::Missing;
        }
        match reply.hands.into_iter().next() {
            None => Self::Empty,
            Some(detection) => {
                let handedness = match Handedness::try_from(detection.handedness.as_str()) {
                    Ok(handedness) => handedness,
                    Err(e) => {
                        log::warn!("{}", e);
                        return Self::Empty;
                    }
                };
                let landmarks = detection
                    .landmarks
                    .into_iter()
                    .map(|p| Landmark::new(p.x, p.y))
                    .collect::<Vec<_>>();
                match Hand::try_from((landmarks, handedness)) {
                    Ok(hand) => {
                        log::trace!("hand {:.2}: {}", detection.score, hand);
                        Self::Hand(hand)
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        Self::Empty
                    }
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::LANDMARK_COUNT;

    /// Serialize a hand the way the helper does.
    pub(crate) fn line(hand: &Hand) -> String {
        let points = hand
            .landmarks()
            .iter()
            .map(|l| format!(r#"{{"x":{},"y":{},"z":0.0}}"#, l.x, l.y))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            r#"{{"captured":true,"hands":[{{"handedness":"{}","score":0.97,"landmarks":[{}]}}]}}"#,
            hand.handedness(),
            points
        )
    }

    fn sample(line: &str) -> Sample {
        Sample::from(Reply::try_from(line).unwrap())
    }

    #[test]
    fn decodes_a_hand() {
        let hand = crate::gesture::hand::tests::showing(2);
        assert_eq!(sample(&line(&hand)), Sample::Hand(hand));
    }

    #[test]
    fn no_hands_is_empty() {
        assert_eq!(sample(r#"{"captured":true,"hands":[]}"#), Sample::Empty);
        assert_eq!(sample(r#"{"hands":[]}"#), Sample::Empty);
    }

    #[test]
    fn failed_capture_is_missing() {
        assert_eq!(sample(r#"{"captured":false}"#), Sample::Missing);
        assert_eq!(sample(r#"{"error":"camera unplugged"}"#), Sample::Missing);
    }

    #[test]
    fn short_hand_is_empty() {
        let points = vec![r#"{"x":0.5,"y":0.5}"#; LANDMARK_COUNT - 1].join(",");
        let line = format!(r#"{{"hands":[{{"handedness":"Left","landmarks":[{}]}}]}}"#, points);
        assert_eq!(sample(&line), Sample::Empty);
    }

    #[test]
    fn unknown_handedness_is_empty() {
        let points = vec![r#"{"x":0.5,"y":0.5}"#; LANDMARK_COUNT].join(",");
        let line = format!(r#"{{"hands":[{{"handedness":"Up","landmarks":[{}]}}]}}"#, points);
        assert_eq!(sample(&line), Sample::Empty);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Reply::try_from("READY").is_err());
        assert!(Reply::try_from("{\"hands\": 3}").is_err());
    }
}
