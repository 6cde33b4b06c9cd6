//! The trait is usable as a generic bound and passes codes through.

use orrery_sgp4::{
    InputType, OpsMode, PropagationError, Propagator, RunType, StateVector, TLE_LINE_CAPACITY,
    TimeWindow,
};

struct FixedOrbit;

struct Record {
    epoch: f64,
    decay_mjd: f64,
}

impl Propagator for FixedOrbit {
    type Record = Record;

    fn twoline_to_record(
        &self,
        line1: &str,
        line2: &str,
        _run_type: RunType,
        _input_type: InputType,
        _ops_mode: OpsMode,
        window: &mut TimeWindow,
    ) -> Option<Record> {
        if !line1.starts_with('1') || !line2.starts_with('2') {
            return None;
        }
        if line1.len() > TLE_LINE_CAPACITY || line2.len() > TLE_LINE_CAPACITY {
            return None;
        }
        window.step = 1.0;
        Some(Record { epoch: 60000.0, decay_mjd: 60010.0 })
    }

    fn propagate(&self, record: &mut Record, utc_mjd: f64) -> orrery_sgp4::Result<StateVector> {
        if utc_mjd > record.decay_mjd {
            return Err(PropagationError::from_code(6).unwrap());
        }
        Ok(StateVector { position: [6778.0, 0.0, 0.0], velocity: [0.0, 7.67, 0.0] })
    }

    fn epoch(&self, record: &Record) -> f64 {
        record.epoch
    }

    fn perigee_height(&self, _record: &Record) -> f64 {
        400.0
    }
}

fn altitude_at<P: Propagator>(propagator: &P, record: &mut P::Record, mjd: f64) -> Result<f64, i32> {
    propagator
        .propagate(record, mjd)
        .map(|state| state.position[0] - 6378.0)
        .map_err(|e| e.code())
}

#[test]
fn record_is_built_from_two_lines() {
    let mut window = TimeWindow::default();
    let record = FixedOrbit.twoline_to_record(
        "1 25544U 98067A   24001.00000000",
        "2 25544  51.6400 000.0000 0001000",
        RunType::Catalog,
        InputType::MinutesFromEpoch,
        OpsMode::Improved,
        &mut window,
    );

    let record = record.unwrap();
    assert_eq!(FixedOrbit.epoch(&record), 60000.0);
    assert_eq!(FixedOrbit.perigee_height(&record), 400.0);
    assert_eq!(window.step, 1.0);
}

#[test]
fn error_codes_reach_the_caller() {
    let mut record = Record { epoch: 60000.0, decay_mjd: 60010.0 };
    assert_eq!(altitude_at(&FixedOrbit, &mut record, 60001.0), Ok(400.0));
    assert_eq!(altitude_at(&FixedOrbit, &mut record, 60011.0), Err(6));
}

#[test]
fn overlong_lines_are_rejected() {
    let mut window = TimeWindow::default();
    let long = format!("1{}", " ".repeat(TLE_LINE_CAPACITY));
    let record = FixedOrbit.twoline_to_record(
        &long,
        "2 25544  51.6400 000.0000 0001000",
        RunType::Catalog,
        InputType::MinutesFromEpoch,
        OpsMode::Improved,
        &mut window,
    );
    assert!(record.is_none());
}
