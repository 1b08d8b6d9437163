use crate::error::Result;
use std::io::Write;
use std::mem::size_of;

/// A record laid out the way a C compiler would lay it out.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct Student {
    id: i32,
    gpa: f32,
    name: [u8; 16],
}

impl Student {
    fn new(id: i32, gpa: f32, name: &str) -> Self {
        let mut bytes = [0u8; 16];
        // Keep one byte for the terminator.
        let len = name.len().min(bytes.len() - 1);
        bytes[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            id,
            gpa,
            name: bytes,
        }
    }

    fn name(&self) -> String {
        let len = super::strings::c_strlen(&self.name);
        String::from_utf8_lossy(&self.name[..len]).into_owned()
    }
}

pub(super) fn run<W: Write>(out: &mut W) -> Result<()> {
    let s = Student::new(1, 3.9, "Ujwal");
    writeln!(
        out,
        "Student{{id={}, gpa={:.2}, name={}}} size_of::<Student>()={}",
        s.id,
        s.gpa,
        s.name(),
        size_of::<Student>()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size() {
        assert_eq!(size_of::<Student>(), 24);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let s = Student::new(2, 1.0, "A name that is far too long");
        assert_eq!(s.name().len(), 15);
        assert_eq!(s.name[15], 0);
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Student{id=1, gpa=3.90, name=Ujwal} size_of::<Student>()=24\n"
        );
    }
}
