#![cfg(all(feature = "derive", feature = "std"))]

use posture_sense::{
    avec::{Decoder, FromNotifications},
    sans::{
        anomaly::{Channel, LengthAnomaly},
        calibration::Calibration,
        real_time::Posture,
    },
};
use tinyvec::ArrayVec;

#[derive(Debug, Default, FromNotifications)]
struct Session {
    #[notification(battery)]
    battery: Option<u8>,
    #[notification(posture)]
    postures: Vec<Posture>,
    #[notification(calibration)]
    calibration: Option<Calibration>,
    #[notification(anomaly)]
    anomalies: Vec<LengthAnomaly>,
    ignored: u32,
}

#[test]
fn collect_session() {
    let mut decoder = Decoder::new();
    let mut session = Session::default();

    decoder.decode(Channel::BatteryLevel, &[80], &mut session);
    decoder.decode(Channel::BatteryLevel, &[79], &mut session);
    decoder.decode(Channel::SensorCoefficients, &[1, 0].repeat(6), &mut session);
    decoder.decode(Channel::SensorOffsets, &[0; 12], &mut session);
    decoder.decode(Channel::RealTimeData, &[3, 0].repeat(10), &mut session);
    decoder.decode(Channel::RealTimeData, &[7, 0], &mut session);

    assert_eq!(session.battery, Some(79));
    assert_eq!(session.calibration.as_ref(), Some(decoder.calibration()));
    assert_eq!(session.ignored, 0);

    assert_eq!(session.postures.len(), 2);
    assert_eq!(session.postures[0].angles, [3.0; 6]);
    assert_eq!(session.postures[1].angles, [7.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    assert_eq!(
        session.anomalies,
        [LengthAnomaly {
            channel: Channel::RealTimeData,
            expected: 20,
            found: 2,
        }]
    );
}

#[derive(Debug, Default, FromNotifications)]
struct Recent {
    #[notification(posture, |a, p: Posture| {
        if a.len() == a.capacity() {
            a.remove(0);
        }
        a.push(p);
    })]
    postures: ArrayVec<[Posture; 3]>,
    #[notification(battery, |low, level: u8| *low |= level < 20)]
    low_battery: bool,
}

#[test]
fn accumulate_with_handlers() {
    let mut decoder = Decoder::with_calibration(Calibration::new([0; 6], [1; 6], [0; 6]));
    let mut recent = Recent::default();

    for i in 0..5u8 {
        decoder.decode(Channel::RealTimeData, &[i, 0], &mut recent);
    }

    let firsts: Vec<f32> = recent.postures.iter().map(|p| p.angles[0]).collect();
    assert_eq!(firsts, [2.0, 3.0, 4.0]);

    decoder.decode(Channel::BatteryLevel, &[50], &mut recent);
    assert!(!recent.low_battery);
    decoder.decode(Channel::BatteryLevel, &[19], &mut recent);
    assert!(recent.low_battery);
    decoder.decode(Channel::BatteryLevel, &[90], &mut recent);
    assert!(recent.low_battery);
}

#[test]
fn unit_receiver_ignores_values() {
    let mut decoder = Decoder::new();
    decoder.decode(Channel::AccelerometerOffsets, &[1, 0].repeat(6), &mut ());
    assert_eq!(decoder.calibration().accelerometer_offsets(), &[1; 6]);
}
