use crate::domain::{ClientLocationRecord, GeofenceArea};
use crate::membership::locate;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRef {
    pub id: String,
    pub topic: String,
}

impl From<&GeofenceArea> for AreaRef {
    fn from(area: &GeofenceArea) -> Self {
        AreaRef {
            id: area.id().to_string(),
            topic: area.topic().to_string(),
        }
    }
}

/// A client's latest record together with the area it currently falls in.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAssociation {
    #[serde(flatten)]
    pub location: ClientLocationRecord,
    pub area: Option<AreaRef>,
}

pub fn associate(records: &[ClientLocationRecord], areas: &[GeofenceArea]) -> Vec<ClientAssociation> {
    records
        .iter()
        .map(|record| ClientAssociation {
            location: record.clone(),
            area: locate(record.position(), areas).map(AreaRef::from),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeofenceDraft, LatLng};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn record(client_id: &str, lat: f64, lng: f64) -> ClientLocationRecord {
        ClientLocationRecord {
            client_id: client_id.to_string(),
            lat,
            lng,
            punch_status: "in".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn associates_each_client_with_its_area() -> Result<(), crate::domain::ValidationError> {
        let office = GeofenceArea::new(
            "office",
            GeofenceDraft::new("Office", "HQ", vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 10.0), LatLng::new(10.0, 0.0)])?,
            Utc::now(),
        );
        let records = vec![record("inside", 1.0, 1.0), record("outside", 20.0, 20.0)];

        let associations = associate(&records, &[office]);

        assert_eq!(
            associations,
            vec![
                ClientAssociation {
                    location: records[0].clone(),
                    area: Some(AreaRef {
                        id: "office".to_string(),
                        topic: "Office".to_string(),
                    }),
                },
                ClientAssociation {
                    location: records[1].clone(),
                    area: None,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn serializes_the_record_fields_inline() -> Result<(), serde_json::Error> {
        let association = ClientAssociation {
            location: record("phone-1", 1.0, 2.0),
            area: None,
        };

        let json = serde_json::to_value(&association)?;

        assert_eq!(json["clientId"], "phone-1");
        assert_eq!(json["punchStatus"], "in");
        assert!(json["area"].is_null());
        Ok(())
    }
}
