// patterns.rs - Built-in RLE pattern library

use crate::error::CatalogueError;
use crate::rle::Pattern;

pub struct BuiltinPattern {
    pub name: &'static str,
    pub rle: &'static str,
}

impl BuiltinPattern {
    pub fn decode(&self) -> Result<Pattern, CatalogueError> {
        Pattern::decode(self.rle).map_err(|source| CatalogueError::Pattern {
            name: self.name,
            source,
        })
    }
}

pub const BEEHIVE: BuiltinPattern = BuiltinPattern {
    name: "Beehive",
    rle: "#N Beehive
#O John Conway
#C An extremely common 6-cell still life.
#C www.conwaylife.com/wiki/index.php?title=Beehive
x = 4, y = 3, rule = B3/S23
b2ob$o2bo$b2o!",
};

pub const GLIDER: BuiltinPattern = BuiltinPattern {
    name: "Glider",
    rle: "#N Glider
#O Richard K. Guy
#C The smallest, most common, and first discovered spaceship. Diagonal, has period 4 and speed c/4.
#C www.conwaylife.com/wiki/index.php?title=Glider
x = 3, y = 3, rule = B3/S23
bob$2bo$3o!",
};

pub const BLOCK: BuiltinPattern = BuiltinPattern {
    name: "Block",
    rle: "#N Block
#C An extremely common 4-cell still life.
#C www.conwaylife.com/wiki/index.php?title=Block
x = 2, y = 2, rule = B3/S23
2o$2o!",
};

pub const BLINKER: BuiltinPattern = BuiltinPattern {
    name: "Blinker",
    rle: "#N Blinker
#O John Conway
#C A period 2 oscillator that is the smallest and most common oscillator.
#C www.conwaylife.com/wiki/index.php?title=Blinker
x = 3, y = 1, rule = B3/S23
3o!",
};

pub const R_PENTOMINO: BuiltinPattern = BuiltinPattern {
    name: "R-pentomino",
    rle: "#N R-pentomino
#C A methuselah with lifespan 1103.
#C www.conwaylife.com/wiki/index.php?title=R-pentomino
x = 3, y = 3, rule = B3/S23
b2o$2ob$bo!",
};

pub const TOAD: BuiltinPattern = BuiltinPattern {
    name: "Toad",
    rle: "#N Toad
#O Simon Norton
#C A period 2 oscillator.
x = 4, y = 2, rule = B3/S23
b3o$3o!",
};

pub const BEACON: BuiltinPattern = BuiltinPattern {
    name: "Beacon",
    rle: "#N Beacon
#C A period 2 oscillator made of two diagonally touching blocks.
x = 4, y = 4, rule = B3/S23
2o$2o$2b2o$2b2o!",
};

pub const PULSAR: BuiltinPattern = BuiltinPattern {
    name: "Pulsar",
    rle: "#N Pulsar
#O John Conway
#C A period 3 oscillator.
x = 13, y = 13, rule = B3/S23
2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$2b3o3b3o2b$o4bob
o4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
};

pub const GOSPER_GLIDER_GUN: BuiltinPattern = BuiltinPattern {
    name: "Gosper glider gun",
    rle: "#N Gosper glider gun
#O Bill Gosper
#C The first known gun and the first known finite pattern with unbounded growth.
x = 36, y = 9, rule = B3/S23
24bo11b$22bobo11b$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o14b$2o8b
o3bob2o4bobo11b$10bo5bo7bo11b$11bo3bo20b$12b2o22b!",
};

pub const GLIDER_LOOP: BuiltinPattern = BuiltinPattern {
    name: "Glider loop",
    rle: "#N Glider loop
#C A pattern in which two gliders are bounced back and forth along an
#C ever-lengthening track.
#C www.conwaylife.com/wiki/index.php?title=Glider_loop
x = 73, y = 150, rule = b3/s23
45bo27b$37b3o5bo27b$36bo2b2o3bobo26b$35bo5bo3bo27b$41bo3bo27b$36b2o2bo
32b$25b2o11b2o33b$25b2o46b6$61bo11b$17b2o40b2ob2o9b$17b2o42bo11b3$59b
2o12b$58bo2bo11b$51bo5bo3b2o10b$51bo5bo4bo10b$9b2o40bo6bo3bo10b$9b2o
37bob3obo3bo2bo11b$48b5obo5bo12b$48bobo22b$52b2o17bob$52b2o9b3o5bob$
52bo9bo2b2o3bobo$51b2o8bo5bo3bob$46b2o3bo15bo3bob$17b3o31bo10b2o2bo6b$
20bo29b2obo10b2o7b$15b2o4bo30bo20b$18bo3bo50b$14bo4bo2bo50b$14bo3bo3bo
50b$14b3obob2o51b$18bo54b$14b4o7b3o45b$14b2o8bo3bo44b$24bo4bo28bo14b$
26bo3bo25b2o9b2o4b$23b3obo2bo24b2o8b3obo3b$22bo7bo23bo10bo3bo3b$22bobo
3bo26b5o5bob2o4b$21b2obo3bo27bo10bo5b$21b2ob3o46b5$63b2o8b$63b2o8b4$
43b3o27b$46bo26b$41b2o4bo25b$44bo3bo6b2o16b$40bo4bo2bo6b2o16b$40bo3bo
3bo24b$40b3obob2o25b$44bo28b$40b4o29b$40b2o31b2$47b2o24b$47b2o24b2$33b
o39b$33bobo37b$33b2o38b3$38b2o33b$37bobo33b$39bo33b2$24b2o47b$24b2o47b
2$31b2o40b$29b4o40b$28bo44b$25b2obob3o40b$24bo3bo3bo40b$16b2o6bo2bo4bo
40b$16b2o6bo3bo44b$25bo4b2o41b$26bo46b$27b3o43b4$8b2o63b$8b2o63b5$46b
3ob2o21b$5bo10bo27bo3bob2o21b$4b2obo5b5o26bo3bobo22b$3bo3bo10bo23bo7bo
22b$3bob3o8b2o24bo2bob3o23b$4b2o9b2o25bo3bo26b$14bo28bo4bo24b$44bo3bo
8b2o14b$45b3o7b4o14b$54bo18b$51b2obob3o14b$50bo3bo3bo14b$50bo2bo4bo14b
$50bo3bo18b$20bo30bo4b2o15b$7b2o10bob2o29bo20b$6bo2b2o10bo31b3o17b$bo
3bo15bo3b2o46b$bo3bo5bo8b2o51b$obo3b2o2bo9bo52b$bo5b3o9b2o52b$bo17b2o
52b$22bobo48b$12bo5bob5o48b$11bo2bo3bob3obo37b2o9b$10bo3bo6bo40b2o9b$
10bo4bo5bo51b$10b2o3bo5bo51b$11bo2bo58b$12b2o59b3$11bo42b2o17b$9b2ob2o
40b2o17b$11bo61b6$46b2o25b$33b2o11b2o25b$32bo2b2o36b$27bo3bo41b$27bo3b
o5bo35b$26bobo3b2o2bo36b$27bo5b3o37b$27bo!",
};

/// Seed used when no pattern file is given.
pub const DEFAULT_SEED: &BuiltinPattern = &GLIDER_LOOP;

/// Everything that can be stamped onto the board from the UI.
pub const PATTERNS: &[&BuiltinPattern] = &[
    &GLIDER_LOOP,
    &GLIDER,
    &BLINKER,
    &TOAD,
    &BEACON,
    &PULSAR,
    &R_PENTOMINO,
    &GOSPER_GLIDER_GUN,
    &BEEHIVE,
    &BLOCK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_decode() {
        for builtin in PATTERNS {
            let pattern = builtin.decode().unwrap();
            assert_eq!(builtin.name, pattern.name(), "{}", builtin.name);
            assert_eq!(pattern.width() * pattern.height(), pattern.cells().len());
        }
    }

    #[test]
    fn test_builtin_shapes() {
        let pulsar = PULSAR.decode().unwrap();
        assert_eq!((13, 13), (pulsar.width(), pulsar.height()));
        assert_eq!(48, pulsar.population());

        let gun = GOSPER_GLIDER_GUN.decode().unwrap();
        assert_eq!((36, 9), (gun.width(), gun.height()));
        assert_eq!(36, gun.population());

        let glider_loop = GLIDER_LOOP.decode().unwrap();
        assert_eq!((73, 150), (glider_loop.width(), glider_loop.height()));
        assert_eq!("b3/s23", glider_loop.rule());
        assert!(glider_loop.comment().starts_with("A pattern in which"));
    }
}
