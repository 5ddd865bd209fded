//! Student records and grade derivation.
//!
//! [`AffiliatedStudent`] wraps a [`Student`] and dereferences to it, so every
//! base field and method is reachable through it. Its `display_details` is an
//! inherent method that *hides* the base one rather than overriding it: there
//! is no trait and no dynamic dispatch, so the static type of the reference
//! decides which display runs.
//!
//! ```
//! use primer::records::{AffiliatedStudent, Student};
//!
//! let s = AffiliatedStudent::new("Ana", "S1", 95.0, "North");
//! assert!(s.display_details().contains("Hostel Name: North"));
//!
//! let base: &Student = &s;
//! assert!(!base.display_details().contains("Hostel Name"));
//! ```

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Letter grade derived from marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map marks to a grade. Boundaries belong to the higher bracket.
    /// NaN compares false against every threshold and lands on `F`.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::A
        } else if marks >= 80.0 {
            Grade::B
        } else if marks >= 70.0 {
            Grade::C
        } else if marks >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// A student record. Fields are stored verbatim, without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub marks: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, id: impl Into<String>, marks: f64) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            marks,
        }
    }

    /// Grade for the current marks. Recomputed on every call.
    pub fn grade(&self) -> Grade {
        Grade::from_marks(self.marks)
    }

    /// Name, ID, marks and grade, one per line.
    pub fn display_details(&self) -> String {
        format!(
            "Name: {}\nID: {}\nMarks: {}\nGrade: {}\n",
            self.name,
            self.id,
            self.marks,
            self.grade()
        )
    }
}

/// A student with a hostel affiliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliatedStudent {
    #[serde(flatten)]
    student: Student,
    pub hostel: String,
}

impl AffiliatedStudent {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        marks: f64,
        hostel: impl Into<String>,
    ) -> Self {
        Self {
            student: Student::new(name, id, marks),
            hostel: hostel.into(),
        }
    }

    /// Attach a hostel to an existing record.
    pub fn from_student(student: Student, hostel: impl Into<String>) -> Self {
        Self {
            student,
            hostel: hostel.into(),
        }
    }

    /// The base record, for callers that want the base behaviour explicitly.
    pub fn as_student(&self) -> &Student {
        &self.student
    }

    pub fn as_student_mut(&mut self) -> &mut Student {
        &mut self.student
    }

    /// Base details followed by the hostel line.
    pub fn display_details(&self) -> String {
        let mut out = self.student.display_details();
        out.push_str(&format!("Hostel Name: {}\n", self.hostel));
        out
    }
}

impl Deref for AffiliatedStudent {
    type Target = Student;

    fn deref(&self) -> &Student {
        &self.student
    }
}

impl AsRef<Student> for AffiliatedStudent {
    fn as_ref(&self) -> &Student {
        &self.student
    }
}
