use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use letter_parser::Parser;

// A medium-size Letter source with every statement form.
const LETTER_SOURCE: &str = r#"
// Geometry helpers
class Point {
    def constructor(x, y) {
        this.x = x;
        this.y = y;
    }

    def calc() {
        return this.x + this.y;
    }
}

class Point3D extends Point {
    def constructor(x, y, z) {
        super(x, y);
        this.z = z;
    }

    def calc() {
        return super() + this.z;
    }
}

/*
 * Numeric helpers
 */
def square(x) {
    return x * x;
}

def sum(values, count) {
    let total = 0, i;
    for (i = 0; i < count; i += 1) {
        total += values[i];
    }
    return total;
}

def clamp(value, low, high) {
    if (value < low) {
        return low;
    } else if (value > high) {
        return high;
    }
    return value;
}

let p = new Point3D(10, 20, 30);
let total = p.calc() * 2 + square(3) - -1;
let flag = !(total >= 100) || total == 42 && p.z != null;

while (total > 10) {
    total -= 1;
}

do {
    total = total / 2;
} while (total > 1);

for (let i = 0; i < 10; i += 1) {
    console.log("step", i, 'of', 10);
}

for (;;) {
    ;
}

let greeting = "hello";
let callbacks = make()();
"#;

fn bench_parse_letter(c: &mut Criterion) {
    c.bench_function("parse_letter_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::new(&arena, black_box(LETTER_SOURCE));
            let program = parser.parse().unwrap();
            black_box(program.body.len());
        });
    });
}

criterion_group!(benches, bench_parse_letter);
criterion_main!(benches);
