use setlist_domain as domain;

/// Shape in which sets are handed to and read from persistence.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub is_warmup: bool,
    #[serde(default)]
    pub is_failure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub time: Option<u32>,
    #[serde(default)]
    pub distance: Option<f32>,
    #[serde(default)]
    pub completed: bool,
}

impl From<domain::Set> for SetRecord {
    fn from(value: domain::Set) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Set> for SetRecord {
    fn from(value: &domain::Set) -> Self {
        Self {
            id: value.id.to_string(),
            group_id: value.group_id.as_ref().map(ToString::to_string),
            is_warmup: value.is_warmup(),
            is_failure: value.is_failure(),
            rest_seconds: value.rest_seconds.map(u32::from),
            weight: value.payload.weight.map(f32::from),
            reps: value.payload.reps.map(u32::from),
            time: value.payload.time.map(u32::from),
            distance: value.payload.distance.map(f32::from),
            completed: value.payload.completed,
        }
    }
}

impl TryFrom<SetRecord> for domain::Set {
    type Error = RecordError;

    fn try_from(value: SetRecord) -> Result<Self, Self::Error> {
        let Some(kind) = domain::SetKind::from_flags(value.is_warmup, value.is_failure) else {
            return Err(RecordError::ConflictingFlags(value.id));
        };
        Ok(Self {
            id: value.id.into(),
            group_id: value.group_id.map(domain::GroupID::from),
            kind,
            rest_seconds: value
                .rest_seconds
                .map(domain::RestSeconds::new)
                .transpose()?,
            payload: domain::SetPayload {
                weight: value.weight.map(domain::Weight::new).transpose()?,
                reps: value.reps.map(domain::Reps::new).transpose()?,
                time: value.time.map(domain::Time::new).transpose()?,
                distance: value.distance.map(domain::Distance::new).transpose()?,
                completed: value.completed,
            },
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("set {0} is marked as warmup and failure")]
    ConflictingFlags(String),
    #[error(transparent)]
    RestSeconds(#[from] domain::RestSecondsError),
    #[error(transparent)]
    Measure(#[from] domain::MeasureError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn sets_from_json(json: &str) -> Result<Vec<domain::Set>, RecordError> {
    serde_json::from_str::<Vec<SetRecord>>(json)?
        .into_iter()
        .map(domain::Set::try_from)
        .collect()
}

pub fn sets_to_json(sets: &[domain::Set]) -> Result<String, RecordError> {
    Ok(serde_json::to_string(
        &sets.iter().map(SetRecord::from).collect::<Vec<_>>(),
    )?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_record_field_names() {
        let set = domain::Set::new("a")
            .in_group("g1")
            .with_kind(domain::SetKind::Warmup)
            .with_rest(domain::RestSeconds::new(90).unwrap());
        let json = serde_json::to_value(SetRecord::from(&set)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a",
                "groupId": "g1",
                "isWarmup": true,
                "isFailure": false,
                "restSeconds": 90,
                "weight": null,
                "reps": null,
                "time": null,
                "distance": null,
                "completed": false,
            })
        );
    }

    #[test]
    fn test_sets_json_round_trip() {
        let sets = vec![
            domain::Set {
                payload: domain::SetPayload {
                    weight: Some(domain::Weight::new(60.0).unwrap()),
                    reps: Some(domain::Reps::new(8).unwrap()),
                    time: None,
                    distance: None,
                    completed: true,
                },
                ..domain::Set::new("a").in_group("g1")
            },
            domain::Set::new("b").with_kind(domain::SetKind::Failure),
        ];
        assert_eq!(sets_from_json(&sets_to_json(&sets).unwrap()).unwrap(), sets);
    }

    #[test]
    fn test_sets_from_json_minimal_record() {
        assert_eq!(
            sets_from_json(r#"[{"id": "a"}]"#).unwrap(),
            vec![domain::Set::new("a")]
        );
    }

    #[test]
    fn test_sets_from_json_conflicting_flags() {
        assert!(matches!(
            sets_from_json(r#"[{"id": "a", "isWarmup": true, "isFailure": true}]"#),
            Err(RecordError::ConflictingFlags(id)) if id == "a"
        ));
    }

    #[test]
    fn test_sets_from_json_invalid_values() {
        assert!(matches!(
            sets_from_json(r#"[{"id": "a", "restSeconds": 0}]"#),
            Err(RecordError::RestSeconds(domain::RestSecondsError::NotPositive))
        ));
        assert!(matches!(
            sets_from_json(r#"[{"id": "a", "reps": 1000}]"#),
            Err(RecordError::Measure(domain::MeasureError::OutOfRange(domain::Measure::Reps)))
        ));
        assert!(matches!(
            sets_from_json("{"),
            Err(RecordError::Json(_))
        ));
    }
}
