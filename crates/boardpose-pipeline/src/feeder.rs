//! Drag-feeder collaborator boundary.
//!
//! A drag feeder advances component tape by dragging a pin between two
//! machine locations. The geometry core only supplies those locations; the
//! motion and pin hardware sit behind trait seams, and any failure they
//! report aborts the sequence where it stands. No retry, no recovery.

use anyhow::Result;
use boardpose_core::{Location, Real};
use log::debug;
use serde::{Deserialize, Serialize};

/// Motion hardware: reports its current location and executes moves.
pub trait MotionController {
    /// Current machine-space location of the tool.
    fn position(&self) -> Location;

    /// Move to `target`, optionally capped at `feed_rate` units per minute.
    fn move_to(&mut self, target: &Location, feed_rate: Option<Real>) -> Result<()>;
}

/// Binary actuator drive (the feed pin).
pub trait Actuator {
    fn actuate(&mut self, on: bool) -> Result<()>;
}

/// A tape feeder that advances tape by dragging a pin from a feed-start to a
/// feed-end location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DragFeeder {
    /// Machine location where the pin enters the feed hole.
    pub feed_start: Location,
    /// Machine location the pin drags the tape to.
    pub feed_end: Location,
    /// Feed rate cap for the drag move, units per minute.
    pub feed_rate: Real,
}

impl DragFeeder {
    /// Run one feed cycle and hand back the unchanged pick location.
    ///
    /// Fixed sequence: raise to safe Z, position over the feed hole at the
    /// current height, extend the pin, descend into the hole, drag to the
    /// feed end at the bounded feed rate, raise to safe Z, retract the pin.
    /// A failure from either collaborator propagates immediately and leaves
    /// the hardware as of the last successful step; the caller decides how to
    /// recover or abort.
    pub fn feed<M: MotionController, A: Actuator>(
        &self,
        motion: &mut M,
        pin: &mut A,
        pick_location: Location,
    ) -> Result<Location> {
        debug!("feed: start {} end {}", self.feed_start, self.feed_end);

        // raise to safe Z
        let here = motion.position();
        motion.move_to(
            &Location::new(here.units, here.x, here.y, 0.0, here.rotation),
            None,
        )?;

        // position the pin above the feed hole, staying at the current height
        let here = motion.position();
        motion.move_to(
            &Location::new(
                self.feed_start.units,
                self.feed_start.x,
                self.feed_start.y,
                here.z,
                here.rotation,
            ),
            None,
        )?;

        // extend the pin
        pin.actuate(true)?;

        // descend into the feed hole
        let here = motion.position();
        motion.move_to(
            &Location::new(here.units, here.x, here.y, self.feed_start.z, here.rotation),
            None,
        )?;

        // drag the tape
        let here = motion.position();
        motion.move_to(
            &Location::new(
                self.feed_end.units,
                self.feed_end.x,
                self.feed_end.y,
                self.feed_end.z,
                here.rotation,
            ),
            Some(self.feed_rate),
        )?;

        // back to safe Z
        let here = motion.position();
        motion.move_to(
            &Location::new(here.units, here.x, here.y, 0.0, here.rotation),
            None,
        )?;

        // retract the pin
        pin.actuate(false)?;

        Ok(pick_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardpose_core::LengthUnit;
    use std::cell::RefCell;
    use std::rc::Rc;

    const MM: LengthUnit = LengthUnit::Millimeters;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Move {
            x: Real,
            y: Real,
            z: Real,
            feed_rate: Option<Real>,
        },
        Pin(bool),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockMotion {
        position: Location,
        log: Log,
        fail_on_move: Option<usize>,
        moves: usize,
    }

    impl MockMotion {
        fn new(log: Log) -> Self {
            Self {
                position: Location::origin(MM),
                log,
                fail_on_move: None,
                moves: 0,
            }
        }
    }

    impl MotionController for MockMotion {
        fn position(&self) -> Location {
            self.position
        }

        fn move_to(&mut self, target: &Location, feed_rate: Option<Real>) -> Result<()> {
            if Some(self.moves) == self.fail_on_move {
                anyhow::bail!("axis fault");
            }
            self.moves += 1;
            self.position = *target;
            self.log.borrow_mut().push(Event::Move {
                x: target.x,
                y: target.y,
                z: target.z,
                feed_rate,
            });
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
    }

    impl Actuator for MockPin {
        fn actuate(&mut self, on: bool) -> Result<()> {
            self.log.borrow_mut().push(Event::Pin(on));
            Ok(())
        }
    }

    fn feeder() -> DragFeeder {
        DragFeeder {
            feed_start: Location::new(MM, 10.0, 20.0, -3.0, 0.0),
            feed_end: Location::new(MM, 10.0, 24.0, -3.0, 0.0),
            feed_rate: 250.0,
        }
    }

    #[test]
    fn feed_runs_the_fixed_sequence() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut motion = MockMotion::new(log.clone());
        let mut pin = MockPin { log: log.clone() };
        let pick = Location::new(MM, 100.0, 50.0, -10.0, 0.0);

        let returned = feeder().feed(&mut motion, &mut pin, pick).unwrap();
        assert_eq!(returned, pick);

        let events = log.borrow();
        assert_eq!(
            *events,
            vec![
                Event::Move { x: 0.0, y: 0.0, z: 0.0, feed_rate: None },
                Event::Move { x: 10.0, y: 20.0, z: 0.0, feed_rate: None },
                Event::Pin(true),
                Event::Move { x: 10.0, y: 20.0, z: -3.0, feed_rate: None },
                Event::Move { x: 10.0, y: 24.0, z: -3.0, feed_rate: Some(250.0) },
                Event::Move { x: 10.0, y: 24.0, z: 0.0, feed_rate: None },
                Event::Pin(false),
            ]
        );
    }

    #[test]
    fn motion_failure_aborts_mid_sequence() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut motion = MockMotion::new(log.clone());
        // Fail the drag move (fourth move issued).
        motion.fail_on_move = Some(3);
        let mut pin = MockPin { log: log.clone() };

        let result = feeder().feed(&mut motion, &mut pin, Location::origin(MM));
        assert!(result.is_err());

        // The pin was extended and never retracted; the drag never happened.
        let events = log.borrow();
        assert_eq!(events.len(), 4);
        assert_eq!(events[2], Event::Pin(true));
        assert!(!events.contains(&Event::Pin(false)));
    }
}
