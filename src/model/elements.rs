// src/model/elements.rs

use std::collections::HashMap;
use std::sync::OnceLock;

/// Display group of an element. Determines the cell fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarth,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub fn color(self) -> (f64, f64, f64) {
        match self {
            Category::AlkaliMetal => (1.00, 0.80, 0.80),         // Pale Red
            Category::AlkalineEarth => (1.00, 0.90, 0.80),       // Pale Orange
            Category::TransitionMetal => (1.00, 1.00, 0.80),     // Pale Yellow
            Category::PostTransitionMetal => (0.90, 1.00, 0.80), // Yellow-Green
            Category::Metalloid => (0.80, 1.00, 0.80),           // Pale Green
            Category::Nonmetal => (0.80, 1.00, 0.90),            // Green-Cyan
            Category::Halogen => (0.80, 0.90, 1.00),             // Pale Blue
            Category::NobleGas => (0.90, 0.80, 1.00),            // Pale Violet
            Category::Lanthanide => (1.00, 0.80, 0.90),          // Pale Pink
            Category::Actinide => (0.88, 0.90, 0.80),            // Olive-Grey
        }
    }
}

/// One periodic table entry. Loaded once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub atomic_number: u32,
    pub mass: f64,
    pub electron_config: &'static str,
    pub shells: &'static [u8],
}

macro_rules! el {
    ($sym:literal, $name:literal, $cat:ident, $z:literal, $mass:literal, $cfg:literal, [$($sh:literal),*]) => {
        Element {
            symbol: $sym,
            name: $name,
            category: Category::$cat,
            atomic_number: $z,
            mass: $mass,
            electron_config: $cfg,
            shells: &[$($sh),*],
        }
    };
}

pub static ELEMENTS: &[Element] = &[
    // --- Period 1 ---
    el!("H", "Hydrogen", Nonmetal, 1, 1.008, "1s1", [1]),
    el!("He", "Helium", NobleGas, 2, 4.003, "1s2", [2]),
    // --- Period 2 ---
    el!("Li", "Lithium", AlkaliMetal, 3, 6.94, "1s2 2s1", [2, 1]),
    el!("Be", "Beryllium", AlkalineEarth, 4, 9.0122, "1s2 2s2", [2, 2]),
    el!("B", "Boron", Metalloid, 5, 10.81, "1s2 2s2 2p1", [2, 3]),
    el!("C", "Carbon", Nonmetal, 6, 12.011, "1s2 2s2 2p2", [2, 4]),
    el!("N", "Nitrogen", Nonmetal, 7, 14.007, "1s2 2s2 2p3", [2, 5]),
    el!("O", "Oxygen", Nonmetal, 8, 15.999, "1s2 2s2 2p4", [2, 6]),
    el!("F", "Fluorine", Halogen, 9, 18.998, "1s2 2s2 2p5", [2, 7]),
    el!("Ne", "Neon", NobleGas, 10, 20.180, "1s2 2s2 2p6", [2, 8]),
    // --- Period 3 ---
    el!("Na", "Sodium", AlkaliMetal, 11, 22.990, "1s2 2s2 2p6 3s1", [2, 8, 1]),
    el!("Mg", "Magnesium", AlkalineEarth, 12, 24.305, "1s2 2s2 2p6 3s2", [2, 8, 2]),
    el!("Al", "Aluminum", PostTransitionMetal, 13, 26.982, "1s2 2s2 2p6 3s2 3p1", [2, 8, 3]),
    el!("Si", "Silicon", Metalloid, 14, 28.085, "1s2 2s2 2p6 3s2 3p2", [2, 8, 4]),
    el!("P", "Phosphorus", Nonmetal, 15, 30.974, "1s2 2s2 2p6 3s2 3p3", [2, 8, 5]),
    el!("S", "Sulfur", Nonmetal, 16, 32.06, "1s2 2s2 2p6 3s2 3p4", [2, 8, 6]),
    el!("Cl", "Chlorine", Halogen, 17, 35.45, "1s2 2s2 2p6 3s2 3p5", [2, 8, 7]),
    el!("Ar", "Argon", NobleGas, 18, 39.948, "1s2 2s2 2p6 3s2 3p6", [2, 8, 8]),
    // --- Period 4 ---
    el!("K", "Potassium", AlkaliMetal, 19, 39.098, "1s2 2s2 2p6 3s2 3p6 4s1", [2, 8, 8, 1]),
    el!("Ca", "Calcium", AlkalineEarth, 20, 40.078, "1s2 2s2 2p6 3s2 3p6 4s2", [2, 8, 8, 2]),
    el!("Sc", "Scandium", TransitionMetal, 21, 44.956, "1s2 2s2 2p6 3s2 3p6 4s2 3d1", [2, 8, 9, 1]),
    el!("Ti", "Titanium", TransitionMetal, 22, 47.867, "1s2 2s2 2p6 3s2 3p6 4s2 3d2", [2, 8, 10, 2]),
    el!("V", "Vanadium", TransitionMetal, 23, 50.942, "1s2 2s2 2p6 3s2 3p6 4s2 3d3", [2, 8, 11, 2]),
    el!("Cr", "Chromium", TransitionMetal, 24, 51.996, "1s2 2s2 2p6 3s2 3p6 4s1 3d5", [2, 8, 13, 1]),
    el!("Mn", "Manganese", TransitionMetal, 25, 54.938, "1s2 2s2 2p6 3s2 3p6 4s2 3d5", [2, 8, 13, 2]),
    el!("Fe", "Iron", TransitionMetal, 26, 55.845, "1s2 2s2 2p6 3s2 3p6 4s2 3d6", [2, 8, 14, 2]),
    el!("Co", "Cobalt", TransitionMetal, 27, 58.933, "1s2 2s2 2p6 3s2 3p6 4s2 3d7", [2, 8, 15, 2]),
    el!("Ni", "Nickel", TransitionMetal, 28, 58.933, "1s2 2s2 2p6 3s2 3p6 4s2 3d8", [2, 8, 16, 2]),
    el!("Cu", "Copper", TransitionMetal, 29, 63.546, "1s2 2s2 2p6 3s2 3p6 4s1 3d10", [2, 8, 18, 1]),
    el!("Zn", "Zinc", TransitionMetal, 30, 65.38, "1s2 2s2 2p6 3s2 3p6 4s2 3d10", [2, 8, 18, 2]),
    el!("Ga", "Gallium", PostTransitionMetal, 31, 69.723, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p1", [2, 8, 18, 3]),
    el!("Ge", "Germanium", Metalloid, 32, 72.63, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p2", [2, 8, 18, 4]),
    el!("As", "Arsenic", Metalloid, 33, 74.922, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p3", [2, 8, 18, 5]),
    el!("Se", "Selenium", Nonmetal, 34, 78.971, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p4", [2, 8, 18, 6]),
    el!("Br", "Bromine", Halogen, 35, 79.904, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p5", [2, 8, 18, 7]),
    el!("Kr", "Krypton", NobleGas, 36, 83.798, "1s2 2s2 2p6 3s2 3p6 4s2 3d10 4p6", [2, 8, 18, 8]),
    // --- Period 5 ---
    el!("Rb", "Rubidium", AlkaliMetal, 37, 85.468, "1s2 2s2 2p6 3s2 3p6 4s2 5s1", [2, 8, 18, 8, 1]),
    el!("Sr", "Strontium", AlkalineEarth, 38, 87.62, "1s2 2s2 2p6 3s2 3p6 4s2 5s2", [2, 8, 18, 8, 2]),
    el!("Y", "Yttrium", TransitionMetal, 39, 88.906, "1s2 2s2 2p6 3s2 3p6 4s2 5s1", [2, 8, 18, 9, 1]),
    el!("Zr", "Zirconium", TransitionMetal, 40, 91.224, "1s2 2s2 2p6 3s2 3p6 4s2 5s2", [2, 8, 18, 10, 2]),
    el!("Nb", "Niobium", TransitionMetal, 41, 92.906, "1s2 2s2 2p6 3s2 3p6 4s2 4d4", [2, 8, 18, 12, 1]),
    el!("Mo", "Molybdenum", TransitionMetal, 42, 95.95, "1s2 2s2 2p6 3s2 3p6 4s2 4d5", [2, 8, 18, 13, 1]),
    el!("Tc", "Technetium", TransitionMetal, 43, 98.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d5", [2, 8, 18, 13, 2]),
    el!("Ru", "Ruthenium", TransitionMetal, 44, 101.07, "1s2 2s2 2p6 3s2 3p6 4s2 4d7", [2, 8, 18, 15, 1]),
    el!("Rh", "Rhodium", TransitionMetal, 45, 102.91, "1s2 2s2 2p6 3s2 3p6 4s2 4d8", [2, 8, 18, 16, 1]),
    el!("Pd", "Palladium", TransitionMetal, 46, 106.42, "1s2 2s2 2p6 3s2 3p6 4s2 4d10", [2, 8, 18, 18, 0]),
    el!("Ag", "Silver", TransitionMetal, 47, 107.87, "1s2 2s2 2p6 3s2 3p6 4s1 4d10", [2, 8, 18, 18, 1]),
    el!("Cd", "Cadmium", TransitionMetal, 48, 112.41, "1s2 2s2 2p6 3s2 3p6 4s2 4d10", [2, 8, 18, 18, 2]),
    el!("In", "Indium", PostTransitionMetal, 49, 114.82, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p1", [2, 8, 18, 18, 3]),
    el!("Sn", "Tin", PostTransitionMetal, 50, 118.71, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p2", [2, 8, 18, 18, 4]),
    el!("Sb", "Antimony", Metalloid, 51, 121.76, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p3", [2, 8, 18, 18, 5]),
    el!("Te", "Tellurium", Metalloid, 52, 127.60, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p4", [2, 8, 18, 18, 6]),
    el!("I", "Iodine", Halogen, 53, 126.90, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p5", [2, 8, 18, 18, 7]),
    el!("Xe", "Xenon", NobleGas, 54, 131.29, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p6", [2, 8, 18, 18, 8]),
    // --- Period 6 ---
    el!("Cs", "Cesium", AlkaliMetal, 55, 132.91, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s1", [2, 8, 18, 18, 8, 1]),
    el!("Ba", "Barium", AlkalineEarth, 56, 137.33, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2", [2, 8, 18, 18, 8, 2]),
    el!("La", "Lanthanum", Lanthanide, 57, 138.91, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d1", [2, 8, 18, 18, 9]),
    el!("Ce", "Cerium", Lanthanide, 58, 140.12, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f1", [2, 8, 18, 18, 11]),
    el!("Pr", "Praseodymium", Lanthanide, 59, 140.91, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f3", [2, 8, 18, 18, 12]),
    el!("Nd", "Neodymium", Lanthanide, 60, 144.24, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f4", [2, 8, 18, 18, 13]),
    el!("Pm", "Promethium", Lanthanide, 61, 145.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f5", [2, 8, 18, 18, 14]),
    el!("Sm", "Samarium", Lanthanide, 62, 150.36, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f6", [2, 8, 18, 18, 15]),
    el!("Eu", "Europium", Lanthanide, 63, 151.96, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f7", [2, 8, 18, 18, 16]),
    el!("Gd", "Gadolinium", Lanthanide, 64, 157.25, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f7", [2, 8, 18, 18, 18]),
    el!("Tb", "Terbium", Lanthanide, 65, 158.93, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f9", [2, 8, 18, 18, 19]),
    el!("Dy", "Dysprosium", Lanthanide, 66, 162.50, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f10", [2, 8, 18, 18, 20]),
    el!("Ho", "Holmium", Lanthanide, 67, 164.93, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f11", [2, 8, 18, 18, 21]),
    el!("Er", "Erbium", Lanthanide, 68, 167.26, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f12", [2, 8, 18, 18, 22]),
    el!("Tm", "Thulium", Lanthanide, 69, 168.93, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f13", [2, 8, 18, 18, 23]),
    el!("Yb", "Ytterbium", Lanthanide, 70, 173.04, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f14", [2, 8, 18, 18, 24]),
    el!("Lu", "Lutetium", Lanthanide, 71, 174.97, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 4f14 5d1", [2, 8, 18, 18, 25]),
    el!("Hf", "Hafnium", TransitionMetal, 72, 178.49, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d2", [2, 8, 18, 32, 2]),
    el!("Ta", "Tantalum", TransitionMetal, 73, 180.95, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d3", [2, 8, 18, 32, 3]),
    el!("W", "Tungsten", TransitionMetal, 74, 183.84, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d4", [2, 8, 18, 32, 4]),
    el!("Re", "Rhenium", TransitionMetal, 75, 186.21, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d5", [2, 8, 18, 32, 5]),
    el!("Os", "Osmium", TransitionMetal, 76, 190.23, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d6", [2, 8, 18, 32, 6]),
    el!("Ir", "Iridium", TransitionMetal, 77, 192.22, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d7", [2, 8, 18, 32, 7]),
    el!("Pt", "Platinum", TransitionMetal, 78, 195.08, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d8", [2, 8, 18, 32, 8]),
    el!("Au", "Gold", TransitionMetal, 79, 196.97, "1s2 2s2 2p6 3s2 3p6 4s1 4d10 5s2 5d9", [2, 8, 18, 32, 9]),
    el!("Hg", "Mercury", TransitionMetal, 80, 200.59, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5d10", [2, 8, 18, 32, 10]),
    el!("Tl", "Thallium", PostTransitionMetal, 81, 204.38, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p1", [2, 8, 18, 32, 1]),
    el!("Pb", "Lead", PostTransitionMetal, 82, 207.2, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p2", [2, 8, 18, 32, 2]),
    el!("Bi", "Bismuth", PostTransitionMetal, 83, 208.98, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p3", [2, 8, 18, 32, 3]),
    el!("Po", "Polonium", Metalloid, 84, 209.98, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p4", [2, 8, 18, 32, 4]),
    el!("At", "Astatine", Halogen, 85, 210.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p5", [2, 8, 18, 32, 5]),
    el!("Rn", "Radon", NobleGas, 86, 222.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 5p6", [2, 8, 18, 32, 6]),
    // --- Period 7 ---
    el!("Fr", "Francium", AlkaliMetal, 87, 223.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s1", [2, 8, 18, 32, 7, 1]),
    el!("Ra", "Radium", AlkalineEarth, 88, 226.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2", [2, 8, 18, 32, 7, 2]),
    el!("Ac", "Actinium", Actinide, 89, 227.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 6d1", [2, 8, 18, 32, 8, 1]),
    el!("Th", "Thorium", Actinide, 90, 232.04, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f0", [2, 8, 18, 32, 9]),
    el!("Pa", "Protactinium", Actinide, 91, 231.04, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f1", [2, 8, 18, 32, 10]),
    el!("U", "Uranium", Actinide, 92, 238.03, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f3", [2, 8, 18, 32, 12]),
    el!("Np", "Neptunium", Actinide, 93, 237.048, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f4", [2, 8, 18, 32, 13]),
    el!("Pu", "Plutonium", Actinide, 94, 244.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f6", [2, 8, 18, 32, 15]),
    el!("Am", "Americium", Actinide, 95, 243.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f7", [2, 8, 18, 32, 16]),
    el!("Cm", "Curium", Actinide, 96, 247.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f7", [2, 8, 18, 32, 17]),
    el!("Bk", "Berkelium", Actinide, 97, 247.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f9", [2, 8, 18, 32, 19]),
    el!("Cf", "Californium", Actinide, 98, 251.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f10", [2, 8, 18, 32, 20]),
    el!("Es", "Einsteinium", Actinide, 99, 252.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f11", [2, 8, 18, 32, 21]),
    el!("Fm", "Fermium", Actinide, 100, 257.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f12", [2, 8, 18, 32, 22]),
    el!("Md", "Mendelevium", Actinide, 101, 258.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f13", [2, 8, 18, 32, 23]),
    el!("No", "Nobelium", Actinide, 102, 259.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14", [2, 8, 18, 32, 24]),
    el!("Lr", "Lawrencium", Actinide, 103, 262.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 7s2", [2, 8, 18, 32, 24, 2]),
    el!("Rf", "Rutherfordium", TransitionMetal, 104, 267.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 6d2", [2, 8, 18, 32, 32, 2]),
    el!("Db", "Dubnium", TransitionMetal, 105, 270.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 6d3", [2, 8, 18, 32, 32, 3]),
    el!("Sg", "Seaborgium", TransitionMetal, 106, 271.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 6d4", [2, 8, 18, 32, 32, 4]),
    el!("Bh", "Bohrium", TransitionMetal, 107, 270.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 6d5", [2, 8, 18, 32, 32, 5]),
    el!("Hs", "Hassium", TransitionMetal, 108, 277.0, "1s2 2s2 2p6 3s2 3p6 4s2 4d10 5s2 6s2 5f14 6d6", [2, 8, 18, 32, 32, 6]),
    el!("Mt", "Meitnerium", TransitionMetal, 109, 278.0, "[Rn] 5f14 6d7 7s2", [2, 8, 18, 32, 32, 15, 2]),
    el!("Ds", "Darmstadtium", TransitionMetal, 110, 281.0, "[Rn] 5f14 6d8 7s2", [2, 8, 18, 32, 32, 16, 2]),
    el!("Rg", "Roentgenium", TransitionMetal, 111, 282.0, "[Rn] 5f14 6d9 7s2", [2, 8, 18, 32, 32, 17, 2]),
    el!("Cn", "Copernicium", TransitionMetal, 112, 285.0, "[Rn] 5f14 6d10 7s2", [2, 8, 18, 32, 32, 18, 2]),
    el!("Nh", "Nihonium", PostTransitionMetal, 113, 286.0, "[Rn] 5f14 6d10 7s2 7p1", [2, 8, 18, 32, 32, 18, 3]),
    el!("Fl", "Flerovium", PostTransitionMetal, 114, 289.0, "[Rn] 5f14 6d10 7s2 7p2", [2, 8, 18, 32, 32, 18, 4]),
    el!("Mc", "Moscovium", PostTransitionMetal, 115, 290.0, "[Rn] 5f14 6d10 7s2 7p3", [2, 8, 18, 32, 32, 18, 5]),
    el!("Lv", "Livermorium", PostTransitionMetal, 116, 293.0, "[Rn] 5f14 6d10 7s2 7p4", [2, 8, 18, 32, 32, 18, 6]),
    el!("Ts", "Tennessine", Halogen, 117, 294.0, "[Rn] 5f14 6d10 7s2 7p5", [2, 8, 18, 32, 32, 18, 7]),
    el!("Og", "Oganesson", NobleGas, 118, 294.0, "[Rn] 5f14 6d10 7s2 7p6", [2, 8, 18, 32, 32, 18, 8]),
];

// Symbol index (built once at first lookup)
static INDEX: OnceLock<HashMap<&'static str, &'static Element>> = OnceLock::new();

/// Looks up an element by symbol. Returns None for blank layout slots
/// and the row marker cells ("*", "#", "*La", "#Ac").
pub fn get(symbol: &str) -> Option<&'static Element> {
    let index = INDEX.get_or_init(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect());
    index.get(symbol).copied()
}

/// The four info panel lines for an element.
pub fn info_lines(element: &Element) -> Vec<String> {
    vec![
        format!("Name: {}", element.name),
        format!("Atomic Number: {}", element.atomic_number),
        format!("Mass: {}", element.mass),
        format!("Electron Configuration: {}", element.electron_config),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(ELEMENTS.len(), 118);

        // Atomic numbers run 1..=118 in declaration order
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.atomic_number, i as u32 + 1, "out of order at {}", e.symbol);
        }
    }

    #[test]
    fn test_lookup() {
        let h = get("H").unwrap();
        assert_eq!(h.name, "Hydrogen");
        assert_eq!(h.shells, &[1]);

        let og = get("Og").unwrap();
        assert_eq!(og.atomic_number, 118);

        assert!(get("").is_none());
        assert!(get("*").is_none());
        assert!(get("*La").is_none());
        assert!(get("Xx").is_none());
    }

    #[test]
    fn test_symbols_unique() {
        let mut seen = std::collections::HashSet::new();
        for e in ELEMENTS {
            assert!(seen.insert(e.symbol), "duplicate symbol {}", e.symbol);
        }
    }

    #[test]
    fn test_info_lines() {
        let lines = info_lines(get("Na").unwrap());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name: Sodium");
        assert_eq!(lines[1], "Atomic Number: 11");
        assert_eq!(lines[3], "Electron Configuration: 1s2 2s2 2p6 3s1");
    }
}
