/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use nalgebra::{Matrix3, Vector3};
use serde::{Serialize,Deserialize};

/// a plain 3D cartesian vector
/// note that we do not attach units or frames here - positions are km and velocities km/s by
/// convention, and the frame is implied by whoever produced the value

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn from_array (a: &[f64;3])->Cartesian3 {
        Cartesian3{ x: a[0], y: a[1], z: a[2] }
    }

    pub fn to_array (&self)->[f64;3] {
        [self.x, self.y, self.z]
    }

    pub fn from_vector3 (v: &Vector3<f64>)->Cartesian3 {
        Cartesian3{ x: v[0], y: v[1], z: v[2] }
    }

    pub fn to_vector3 (&self)->Vector3<f64> {
        Vector3::new( self.x, self.y, self.z)
    }

    /// apply a (rotation) matrix, i.e. compute `m * self`
    pub fn transformed (&self, m: &Matrix3<f64>)->Cartesian3 {
        Cartesian3::from_vector3( &(m * self.to_vector3()))
    }

    pub fn dot (&self, p: &Cartesian3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn length (&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared (&self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// euclidean distance between two points
    pub fn distance (&self, p: &Cartesian3) -> f64 {
        (self - p).length()
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prec) = f.precision() {
            write!(f, "[ {:.*}, {:.*}, {:.*} ]", prec, self.x, prec, self.y, prec, self.z)
        } else {
            write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
        }
    }
}

impl From<[f64;3]> for Cartesian3 {
    fn from (a: [f64;3]) -> Self { Cartesian3::from_array(&a) }
}

impl From<Cartesian3> for [f64;3] {
    fn from (p: Cartesian3) -> Self { p.to_array() }
}

impl Add for Cartesian3 {
    type Output = Self;

     fn add (self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl Add for &Cartesian3 {
    type Output = Cartesian3;

     fn add (self, rhs: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl AddAssign for Cartesian3 {
     fn add_assign (&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

     fn sub (self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl Sub for &Cartesian3 {
    type Output = Cartesian3;

     fn sub (self, rhs: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z
        }
    }
}

impl SubAssign for Cartesian3 {
     fn sub_assign (&mut self, rhs: Self)  {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Cartesian3 {
    type Output = Self;

    fn neg (self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

     fn mul (self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

impl Mul<f64> for &Cartesian3 {
    type Output = Cartesian3;

     fn mul (self, rhs: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

impl MulAssign<f64> for Cartesian3 {
    fn mul_assign (&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
