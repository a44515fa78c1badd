use isotime::{TimeOfDay, TimezoneOffset};

#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
struct Meeting {
    starts: TimeOfDay,
    zone: TimezoneOffset,
}

#[test]
fn round_trip_json() {
    let _ = crate::Logger::init();

    let meeting = Meeting {
        starts: TimeOfDay::new(9, 30, 0, 0)
            .unwrap()
            .with_offset(TimezoneOffset::negative(4, 0, 0).unwrap()),
        zone: TimezoneOffset::UNSPECIFIED,
    };
    let json = serde_json::to_string(&meeting).unwrap();
    assert_eq!(json, r#"{"starts":"09:30:00-04:00","zone":"Z"}"#);

    let got: Meeting = serde_json::from_str(&json).unwrap();
    assert_eq!(got, meeting);
}

#[test]
fn deserialize_any_layout() {
    let _ = crate::Logger::init();

    let got: Meeting =
        serde_json::from_str(r#"{"starts":"0930.5+0100","zone":"+0100"}"#)
            .unwrap();
    assert_eq!(
        got.starts,
        TimeOfDay::new(9, 30, 30, 0)
            .unwrap()
            .with_offset(TimezoneOffset::positive(1, 0, 0).unwrap()),
    );
    assert_eq!(got.zone, TimezoneOffset::positive(1, 0, 0).unwrap());
}

#[test]
fn deserialize_error() {
    let _ = crate::Logger::init();

    let err = serde_json::from_str::<TimeOfDay>(r#""12:3045""#).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.starts_with(
            "expected time element delimiter `:` at index 5 since a \
             delimiter was found after the hour, but found '4'"
        ),
        "{msg}",
    );
    assert!(serde_json::from_str::<TimeOfDay>("1230").is_err());
}
