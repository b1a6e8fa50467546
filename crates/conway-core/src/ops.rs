//! Operator overloads backed by a thread-local default context.
//!
//! `a + b`, `a - b` and `a * b` share one [`ArithContext`] per thread, so
//! repeated expressions reuse earlier results. Use an explicit context when
//! the tables should be isolated or inspected without global state.

use std::cell::RefCell;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::arith::ArithContext;
use crate::number::Surreal;
use crate::order;

thread_local! {
    static DEFAULT_CONTEXT: RefCell<ArithContext> = RefCell::new(ArithContext::new());
}

/// Runs `f` with this thread's default arithmetic context.
///
/// # Panics
///
/// Panics if called re-entrantly, e.g. by using `+` on surreal numbers
/// inside `f`. Use the `&mut ArithContext` that `f` receives instead.
pub fn with_default_context<R>(f: impl FnOnce(&mut ArithContext) -> R) -> R {
    DEFAULT_CONTEXT.with(|ctx| f(&mut ctx.borrow_mut()))
}

impl Neg for Surreal {
    type Output = Surreal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Surreal {
    type Output = Surreal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for &Surreal {
    type Output = Surreal;

    fn add(self, rhs: Self) -> Self::Output {
        with_default_context(|ctx| ctx.add(self, rhs))
    }
}

impl Add for Surreal {
    type Output = Surreal;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Surreal> for Surreal {
    type Output = Surreal;

    fn add(self, rhs: &Surreal) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Surreal {
    type Output = Surreal;

    fn sub(self, rhs: Self) -> Self::Output {
        with_default_context(|ctx| ctx.sub(self, rhs))
    }
}

impl Sub for Surreal {
    type Output = Surreal;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Surreal> for Surreal {
    type Output = Surreal;

    fn sub(self, rhs: &Surreal) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Surreal {
    type Output = Surreal;

    fn mul(self, rhs: Self) -> Self::Output {
        with_default_context(|ctx| ctx.mul(self, rhs))
    }
}

impl Mul for Surreal {
    type Output = Surreal;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Surreal> for Surreal {
    type Output = Surreal;

    fn mul(self, rhs: &Surreal) -> Self::Output {
        &self * rhs
    }
}

impl AddAssign<&Surreal> for Surreal {
    fn add_assign(&mut self, rhs: &Surreal) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Surreal {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl SubAssign<&Surreal> for Surreal {
    fn sub_assign(&mut self, rhs: &Surreal) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Surreal {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl MulAssign<&Surreal> for Surreal {
    fn mul_assign(&mut self, rhs: &Surreal) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Surreal {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl Zero for Surreal {
    fn zero() -> Self {
        Surreal::zero()
    }

    fn is_zero(&self) -> bool {
        order::eq(self, &Surreal::zero())
    }
}

impl One for Surreal {
    fn one() -> Self {
        Surreal::one()
    }

    fn is_one(&self) -> bool {
        order::eq(self, &Surreal::one())
    }
}
