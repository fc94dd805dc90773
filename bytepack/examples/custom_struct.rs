use std::collections::HashMap;

use bytepack::{
    ByteBuffer, DeriveFromBytes, DeriveToBytes, FromBytes, Immutable, IntoBytes, KnownLayout,
    Result, ToBytes, ZcFromBytes, deserialize, serialize,
};

/// Plain data: packed as its raw bytes, and as one block inside a `Vec`.
#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
struct Sample {
    timestamp: u64,
    value: f64,
}

bytepack::fixed_layout!(Sample);

/// Composite: fields packed one after another by the derived codec.
#[derive(DeriveToBytes, DeriveFromBytes, Debug, PartialEq)]
struct Series {
    name: String,
    labels: HashMap<String, String>,
    samples: Vec<Sample>,
}

/// Hand-written codec: stores only the celsius reading.
#[derive(Debug, PartialEq)]
struct Celsius(f32);

impl ToBytes for Celsius {
    fn to_bytes(&self, buf: &mut ByteBuffer) {
        serialize(&self.0, buf);
    }
}

impl FromBytes for Celsius {
    fn from_bytes(buf: &mut ByteBuffer) -> Result<Self> {
        Ok(Celsius(deserialize(buf)?))
    }
}

fn main() -> Result<()> {
    let series = Series {
        name: "cpu.temp".into(),
        labels: HashMap::from([("host".into(), "alpha".into())]),
        samples: vec![
            Sample {
                timestamp: 1,
                value: 41.5,
            },
            Sample {
                timestamp: 2,
                value: 42.0,
            },
        ],
    };

    let mut buf = ByteBuffer::new();
    serialize(&series, &mut buf);
    serialize(&Celsius(21.5), &mut buf);
    println!("packed {} bytes", buf.remaining_len());

    let decoded: Series = deserialize(&mut buf)?;
    let reading: Celsius = deserialize(&mut buf)?;
    println!("unpacked {decoded:?} and {reading:?}");

    assert_eq!(decoded, series);
    assert_eq!(reading, Celsius(21.5));
    Ok(())
}
