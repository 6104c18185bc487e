use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use glob::glob;
use tetra::audio::{Sound, SoundInstance};
use tetra::graphics::mesh::{Mesh, ShapeStyle};
use tetra::graphics::text::Font;
use tetra::graphics::{Rectangle, Texture};
use tetra::{Context, Result, TetraError};
use crate::session::{Cue, Effect, Track};
use crate::settings::*;
use crate::tone;

pub(crate) type Textures = HashMap<String, Texture>;

pub(crate) struct Resources {
    pub(crate) textures: Textures,
    pub(crate) font: Font,
    pub(crate) cell: Mesh,
}

impl Resources {
    pub(crate) fn load(ctx: &mut Context, path: &str) -> Result<Self> {
        let textures = load_textures(ctx, path)?;

        for name in [START_TEXTURE, GAME_OVER_TEXTURE].iter() {
            if !textures.contains_key(*name) {
                return Err(missing_asset(Path::new(path).join(format!("{}.png", name))));
            }
        }

        let font = Font::vector(ctx, Path::new(path).join(FONT_FILE), FONT_SIZE)?;
        log::debug!("Loaded font {}", FONT_FILE);

        let cell = Mesh::rectangle(
            ctx,
            ShapeStyle::Fill,
            Rectangle::new(0.0, 0.0, CELL_SIZE as f32, CELL_SIZE as f32),
        )?;

        Ok(Resources { textures, font, cell })
    }

    pub(crate) fn texture(&self, name: &str) -> Option<&Texture> {
        self.textures.get(name)
    }
}

fn load_textures(ctx: &mut Context, path: &str) -> Result<Textures> {
    let mut textures = Textures::new();

    let temp = [path, "/**/*.png"].join("");
    let pattern = temp.as_str();

    let entries = glob(pattern).map_err(|err| TetraError::PlatformError(err.to_string()))?;
    for entry in entries {
        if let Ok(file) = entry {
            if let Some(name) = file.file_stem().and_then(|stem| stem.to_str()) {
                let name = name.to_string();
                textures.insert(name, Texture::new(ctx, &file)?);
                log::debug!("Loaded texture {}", file.display());
            }
        }
    }

    log::info!("Loaded {} textures from {}", textures.len(), path);
    Ok(textures)
}

fn missing_asset(path: PathBuf) -> TetraError {
    TetraError::FailedToLoadAsset {
        reason: io::Error::new(io::ErrorKind::NotFound, "asset not found"),
        path,
    }
}

//
// Jukebox

/// Owns every sound and the background track that is currently looping
pub(crate) struct Jukebox {
    menu: Sound,
    gameplay: Sound,
    game_over: Sound,
    eat: Sound,
    death: Sound,
    playing: Option<SoundInstance>,
}

impl Jukebox {
    pub(crate) fn load(path: &str) -> Result<Self> {
        let dir = Path::new(path);

        let jukebox = Jukebox {
            menu: Sound::new(dir.join(MENU_MUSIC_FILE))?,
            gameplay: Sound::new(dir.join(GAMEPLAY_MUSIC_FILE))?,
            game_over: Sound::new(dir.join(GAME_OVER_MUSIC_FILE))?,
            eat: tone::tone(EAT_TONE_HZ, EAT_TONE_SECONDS, TONE_VOLUME),
            death: tone::tone(DEATH_TONE_HZ, DEATH_TONE_SECONDS, TONE_VOLUME),
            playing: None,
        };

        log::info!("Loaded music and synthesised sound effects");
        Ok(jukebox)
    }

    pub(crate) fn cue(&mut self, ctx: &mut Context, cue: Cue) -> Result {
        match cue {
            Cue::Music(track) => {
                if let Some(instance) = self.playing.take() {
                    instance.stop();
                }

                let sound = match track {
                    Track::Menu => &self.menu,
                    Track::Gameplay => &self.gameplay,
                    Track::GameOver => &self.game_over,
                };
                self.playing = Some(sound.repeat(ctx)?);
                log::debug!("Looping {:?} music", track);
            }
            Cue::Play(effect) => {
                let sound = match effect {
                    Effect::Eat => &self.eat,
                    Effect::Death => &self.death,
                };
                sound.play(ctx)?;
            }
        }

        Ok(())
    }

    pub(crate) fn cue_all(&mut self, ctx: &mut Context, cues: Vec<Cue>) -> Result {
        for cue in cues {
            self.cue(ctx, cue)?;
        }
        Ok(())
    }
}
