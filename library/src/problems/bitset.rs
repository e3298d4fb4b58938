use std::io::Write;

use crate::bitvec::BitVec;
use crate::compress_coord::Counter;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::io::InputStream;
use crate::mo::{self, block::isqrt, Aggregate, Query};

pub const MAX_VALUE: usize = 100_000;

// Does the window hold a[i], a[j] (i may equal j) with ... = x?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Difference(usize),
    Sum(usize),
    Product(usize),
}

// Presence bitsets over values 0..=MAX_VALUE; `rev` holds MAX_VALUE - v for each present v.
#[derive(Clone, Debug)]
pub struct PairFinder {
    count: Counter,
    fwd: BitVec,
    rev: BitVec,
}

impl Default for PairFinder {
    fn default() -> Self {
        Self {
            count: Counter::new(MAX_VALUE + 1),
            fwd: BitVec::zero_bits(MAX_VALUE + 1),
            rev: BitVec::zero_bits(MAX_VALUE + 1),
        }
    }
}

impl Aggregate for PairFinder {
    type Value = u32;
    type Aux = Check;
    type Answer = bool;

    fn add(&mut self, x: &u32) {
        if self.count.inc(*x) == 1 {
            self.fwd.set(*x as usize);
            self.rev.set(MAX_VALUE - *x as usize);
        }
    }

    fn del(&mut self, x: &u32) {
        if self.count.dec(*x) == 0 {
            self.fwd.clear(*x as usize);
            self.rev.clear(MAX_VALUE - *x as usize);
        }
    }

    fn answer(&self, check: &Check) -> bool {
        match *check {
            // b and b + x
            Check::Difference(x) => self.fwd.intersects_shifted(&self.fwd, x),
            // a and x - a, i.e. rev[a + MAX - x]; beyond MAX two values reach up to 2 MAX
            Check::Sum(x) if x <= MAX_VALUE => {
                self.fwd.intersects_shifted(&self.rev, MAX_VALUE - x)
            }
            Check::Sum(x) if x <= 2 * MAX_VALUE => {
                self.rev.intersects_shifted(&self.fwd, x - MAX_VALUE)
            }
            Check::Sum(_) => false,
            Check::Product(0) => self.fwd.get(0),
            Check::Product(x) => (1..=isqrt(x))
                .any(|d| x % d == 0 && self.fwd.get(d) && self.fwd.get(x / d)),
        }
    }
}

fn read_value(input: &mut impl InputStream) -> Result<usize> {
    let value: i64 = input.value()?;
    if !(0..=MAX_VALUE as i64).contains(&value) {
        return Err(Error::ValueOutOfRange {
            value,
            max: MAX_VALUE as i64,
        });
    }
    Ok(value as usize)
}

// n m, array, m × (op l r x) with op 1 = difference, 2 = sum, 3 = product.
pub fn run(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let xs = (0..n)
        .map(|_| Ok(read_value(&mut input)? as u32))
        .collect::<Result<Vec<u32>>>()?;

    let mut queries = vec![];
    for id in 0..m {
        let op = input.word()?;
        let l = input.value()?;
        let r = input.value()?;
        let x = read_value(&mut input)?;
        let check = match op.as_str() {
            "1" => Check::Difference(x),
            "2" => Check::Sum(x),
            "3" => Check::Product(x),
            _ => return Err(Error::UnknownQueryKind(op)),
        };
        queries.push(Query::with_aux(id, l, r, check));
    }

    let answers = mo::solve(&xs, &queries, PairFinder::default(), config)?;
    for found in answers {
        writeln!(out, "{}", if found { "yes" } else { "no" })?;
    }
    Ok(())
}
