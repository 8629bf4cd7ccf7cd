//! Seed data for the builtin hash registry.

/// Identifier strings observed in game data; each is hashed at build time.
pub const KNOWN_IDENTIFIERS: &[&str] = &[
    "layer_volume",
    "pitch",
    "roll",
    "turn",
    "turn_auto",
    "scale_x",
    "scale_y",
    "scale_z",
    "offset_x",
    "offset_y",
    "offset_z",
    "visibla01",
    "visibla02",
    "visible",
    "visiblz01",
    "visiblz02",
    "sequin_speed",
    "win",
    "win_checkpoint",
    "win_checkpoint_silent",
    "play",
    "play_clean",
    "pause",
    "resume",
    "stop",
    "emissive_color",
    "ambient_color",
    "diffuse_color",
    "specular_color",
    "reflectivity_color",
    "alpha",
    "frame",
    "thump_rails.a01",
    "thump_rails.a02",
    "thump_rails.ent",
    "thump_rails.z01",
    "thump_rails.z02",
    "thump_checkpoint.ent",
    "thump_rails_fast_activat.ent",
    "thump_boss_bonus.ent",
    "grindable_still.ent",
    "left_multi.a01",
    "left_multi.a02",
    "left_multi.ent",
    "left_multi.z01",
    "center_multi.a02",
    "center_multi.ent",
    "center_multi.z01",
    "right_multi.a02",
    "right_multi.ent",
    "right_multi.z01",
    "right_multi.z02",
    "grindable_quarters.ent",
    "grindable_double.ent",
    "grindable_thirds.ent",
    "grindable_with_thump.ent",
    "ducker_crak.ent",
    "jumper_1_step.ent",
    "jumper_boss.ent",
    "jumper_6_step.ent",
    "jump_high.ent",
    "jump_high_2.ent",
    "jump_high_4.ent",
    "jump_high_6.ent",
    "jump_boss.ent",
    "swerve_off.a01",
    "swerve_off.a02",
    "swerve_off.ent",
    "swerve_off.z01",
    "swerve_off.z02",
    "millipede_half.a01",
    "millipede_half.a02",
    "millipede_half.ent",
    "millipede_half.z01",
    "millipede_half.z02",
    "millipede_half_phrase.a01",
    "millipede_half_phrase.a02",
    "millipede_half_phrase.ent",
    "millipede_half_phrase.z01",
    "millipede_half_phrase.z02",
    "millipede_quarter.a01",
    "millipede_quarter.a02",
    "millipede_quarter.ent",
    "millipede_quarter.z01",
    "millipede_quarter.z02",
    "millipede_quarter_phrase.a01",
    "millipede_quarter_phrase.a02",
    "millipede_quarter_phrase.ent",
    "millipede_quarter_phrase.z01",
    "millipede_quarter_phrase.z02",
    "sentry.ent",
    "level_9.ent",
    "level_5.ent",
    "level_8.ent",
    "sentry_boss.ent",
    "level_7.ent",
    "level_6.ent",
    "sentry_boss_multilane.ent",
    "level_8_multi.ent",
    "level_9_multi.ent",
    "trees.ent",
    "trees_16.ent",
    "trees_4.ent",
    "speed_streaks_short.ent",
    "speed_streaks_RGB.ent",
    "smoke.ent",
    "death_shatter.ent",
    "speed_streaks.ent",
    "data_streaks_radial.ent",
    "boss_7_tunnel_enter.ent",
    "boss_damage_stage4.ent",
    "crakhed_damage.ent",
    "win_debris.ent",
    "crakhed_destroy.ent",
    "stalactites.ent",
    "aurora.ent",
    "vortex_decorator.ent",
    "boss_damage_stage3.ent",
    "boss_damage_stage1.ent",
    "boss_damage_stage2.ent",
    "black",
    "crakhed",
    "dark_blue",
    "dark_green",
    "dark_red",
    "light_blue",
    "light_green",
    "light_red",
    "fire",
    "diss11",
    "french12",
    "tutorial_thumps.ent",
    "boss_gate_pellet.ent",
];

/// Hashes whose source string is unrecoverable, with an analyst-assigned
/// description of what they tag.
pub const KNOWN_LABELS: &[(u32, &str)] = &[
    (0x5232f8f9, "*.anim Objects"),
    (0x7dd6b7d8, "*.bend Objects"),
    (0x570e17fa, "*.bind Objects"),
    (0x8f86650f, "*.cam Objects"),
    (0xadb02913, "*.ch Objects"),
    (0x4945e860, "*.cond Objects"),
    (0xac1abb2c, "*.dch Objects"),
    (0x9ce604da, "*.dec Objects"),
    (0xacc2033e, "*.dsp Objects"),
    (0xeae6beee, "*.ent Objects"),
    (0x3bbcc4ec, "*.env Objects"),
    (0x86621b1e, "*.flow Objects"),
    (0x6222e06f, "*.flt Objects"),
    (0x993811f5, "*.flt Objects"),
    (0xc2fd0a11, "*.gameplay Objects"),
    (0xaa63a508, "*.gate Objects"),
    (0xc2aaec43, "*.grp Objects"),
    (0xce7e85f6, "*.leaf Objects"),
    (0x711a2715, "*.light Objects"),
    (0xbcd17473, "*.lvl Objects"),
    (0x490780b9, "*.master Objects"),
    (0x1a5812f6, "*.mastering Objects"),
    (0x7ba5c8e0, "*.mat Objects"),
    (0xbf69f115, "*.mesh Objects"),
    (0x1ba51443, "*GFX.objlib Objects"),
    (0xb0954548, "*Sequin.objlib Objects"),
    (0x9d1c6219, "*Obj.objlib Objects"),
    (0x0b374d9e, "*Level.objlib Objects"),
    (0xe674624f, "*Avatar.objlib Objects"),
    (0x4890a3f6, "*.path Objects"),
    (0x745dd78b, "*.playspace Objects"),
    (0x230da622, "*.pulse Objects"),
    (0x7aa8f390, "*.samp Objects"),
    (0xd3058b5d, "*.sdraw / .drawer Objects"),
    (0xcac934cf, "*.sh Objects"),
    (0xd897d5db, "*.spn Objects"),
    (0xd955fdc6, "*.st Objects"),
    (0xe7b3aadb, "*.steer Objects"),
    (0x96ba8a70, "*.tex Objects"),
    (0x799c45a7, "*.vib Objects"),
    (0x4f37349d, "*.vr_settings Objects"),
    (0x7d9db5ef, "*.xfm / .xfmer Objects"),
];
