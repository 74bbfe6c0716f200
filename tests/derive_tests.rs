//! Integration tests for the `#[derive(ParticleType)]` macro.

use plife::{ParticleType, ParticleTypes, TypeCount, TypeIndex};

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum Species {
    Prey,
    Predator,
    Plant,
}

#[test]
fn test_particle_type_into_u32() {
    let prey: u32 = Species::Prey.into();
    let predator: u32 = Species::Predator.into();
    let plant: u32 = Species::Plant.into();

    assert_eq!(prey, 0);
    assert_eq!(predator, 1);
    assert_eq!(plant, 2);
}

#[test]
fn test_particle_type_into_u8() {
    let plant: u8 = Species::Plant.into();
    assert_eq!(plant, 2);
}

#[test]
fn test_particle_type_from_u32() {
    let prey: Species = 0u32.into();
    let predator: Species = 1u32.into();
    let plant: Species = 2u32.into();

    assert_eq!(prey, Species::Prey);
    assert_eq!(predator, Species::Predator);
    assert_eq!(plant, Species::Plant);
}

#[test]
fn test_particle_type_invalid_u32_defaults_to_first() {
    let invalid: Species = 99u32.into();
    assert_eq!(invalid, Species::Prey);
}

#[test]
fn test_particle_type_count() {
    assert_eq!(Species::count(), 3);
    assert_eq!(<Species as TypeCount>::COUNT, 3);
    assert_eq!(Species::Predator.type_index(), 1);
}

#[test]
fn test_enum_sized_table() {
    let mut types = ParticleTypes::for_enum::<Species>();
    assert_eq!(types.size(), 3);

    types.set_attract(Species::Predator, Species::Prey, 1.0).unwrap();
    types.set_attract(Species::Prey, Species::Predator, -1.5).unwrap();
    types.set_max_r(Species::Prey, Species::Plant, 20.0).unwrap();

    assert_eq!(types.attract(1, 0), Ok(1.0));
    assert_eq!(types.attract(Species::Prey, Species::Predator), Ok(-1.5));
    assert_eq!(types.max_r(0u8, 2u8), Ok(20.0));
    assert_eq!(types.max_radius(), 20.0);
}

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum SingleVariant {
    Only,
}

#[test]
fn test_single_variant_particle_type() {
    assert_eq!(SingleVariant::count(), 1);
    let only: u32 = SingleVariant::Only.into();
    assert_eq!(only, 0);
    let back: SingleVariant = 0u32.into();
    assert_eq!(back, SingleVariant::Only);
}

#[derive(ParticleType, Clone, Copy, PartialEq, Debug)]
enum ManyVariants {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

#[test]
fn test_many_variants_particle_type() {
    assert_eq!(ManyVariants::count(), 8);
    assert_eq!(u32::from(ManyVariants::A), 0);
    assert_eq!(u32::from(ManyVariants::H), 7);
    assert_eq!(ParticleTypes::for_enum::<ManyVariants>().size(), 8);
}
