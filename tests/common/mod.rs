#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use ntdb::{Ntdb, Pwm, Switched};

pub const MAX_DUTY: u16 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
    Oe,
    Hv,
    Colon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Duty(Line, u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

impl digital::Error for BusFault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl pwm::Error for BusFault {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

/// Shared record of every line transition, in order.
#[derive(Default)]
pub struct Bench {
    events: RefCell<Vec<Event>>,
    budget: Cell<Option<usize>>,
}

impl Bench {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Lets `ops` more pin operations succeed, then fails every one after.
    pub fn fail_after(&self, ops: usize) {
        self.budget.set(Some(ops));
    }

    pub fn reset(&self) {
        self.events.borrow_mut().clear();
        self.budget.set(None);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: Event) -> usize {
        self.events.borrow().iter().filter(|&&e| e == event).count()
    }

    /// Data line level at every rising clock edge.
    pub fn captured_bits(&self) -> Vec<bool> {
        let mut data = false;
        let mut bits = Vec::new();
        for event in self.events.borrow().iter() {
            match *event {
                Event::Set(Line::Data, level) => data = level,
                Event::Set(Line::Clock, true) => bits.push(data),
                _ => {}
            }
        }
        bits
    }

    /// Captured bits regrouped into bytes, first bit as the LSB.
    pub fn captured_bytes(&self) -> Vec<u8> {
        self.captured_bits()
            .chunks(8)
            .map(|bits| {
                bits.iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << i))
            })
            .collect()
    }

    fn record(&self, event: Event) -> Result<(), BusFault> {
        match self.budget.get() {
            Some(0) => return Err(BusFault),
            Some(n) => self.budget.set(Some(n - 1)),
            None => {}
        }
        self.events.borrow_mut().push(event);
        Ok(())
    }
}

pub struct MockPin {
    line: Line,
    bench: Rc<Bench>,
}

impl MockPin {
    pub fn new(line: Line, bench: &Rc<Bench>) -> Self {
        Self {
            line,
            bench: Rc::clone(bench),
        }
    }
}

impl digital::ErrorType for MockPin {
    type Error = BusFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bench.record(Event::Set(self.line, false))
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bench.record(Event::Set(self.line, true))
    }
}

pub struct MockPwm {
    line: Line,
    bench: Rc<Bench>,
}

impl MockPwm {
    pub fn new(line: Line, bench: &Rc<Bench>) -> Self {
        Self {
            line,
            bench: Rc::clone(bench),
        }
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = BusFault;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.bench.record(Event::Duty(self.line, duty))
    }
}

pub type SwitchedChain<const BOARDS: usize> =
    Ntdb<MockPin, MockPin, MockPin, Switched<MockPin>, MockPin, Switched<MockPin>, BOARDS>;

pub type PwmChain<const BOARDS: usize> =
    Ntdb<MockPin, MockPin, MockPin, Pwm<MockPwm>, MockPin, Pwm<MockPwm>, BOARDS>;

pub fn switched_chain<const BOARDS: usize>(bench: &Rc<Bench>) -> SwitchedChain<BOARDS> {
    Ntdb::new(
        MockPin::new(Line::Data, bench),
        MockPin::new(Line::Clock, bench),
        MockPin::new(Line::Latch, bench),
        Switched(MockPin::new(Line::Oe, bench)),
        MockPin::new(Line::Hv, bench),
        Switched(MockPin::new(Line::Colon, bench)),
    )
}

pub fn pwm_chain<const BOARDS: usize>(bench: &Rc<Bench>) -> PwmChain<BOARDS> {
    Ntdb::new(
        MockPin::new(Line::Data, bench),
        MockPin::new(Line::Clock, bench),
        MockPin::new(Line::Latch, bench),
        Pwm(MockPwm::new(Line::Oe, bench)),
        MockPin::new(Line::Hv, bench),
        Pwm(MockPwm::new(Line::Colon, bench)),
    )
}
