//! Draws a session onto a monochrome panel.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{
        PrimitiveStyle,
        Rectangle,
    },
};

use crate::{
    config::{
        OBSTACLE_HEIGHT,
        OBSTACLE_WIDTH,
        OBSTACLE_Y,
        PLATFORM_HEIGHT,
        PLATFORM_Y,
        SPRITE_SIZE,
        TRACK_WIDTH,
    },
    framebuffer::Framebuffer,
    session::Session,
};

/// A monochrome drawing surface whose contents only reach the glass on
/// [`flush`](Panel::flush).
pub trait Panel: DrawTarget<Color = BinaryColor> {
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// RAM only; nothing to flush to.
impl Panel for Framebuffer {
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

const FILLED: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
const OUTLINE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

const PLATFORM: Rectangle = Rectangle::new(
    Point::new(0, PLATFORM_Y),
    Size::new(TRACK_WIDTH as u32, PLATFORM_HEIGHT as u32),
);
const SPRITE: Size = Size::new(SPRITE_SIZE as u32, SPRITE_SIZE as u32);
const OBSTACLE: Size = Size::new(OBSTACLE_WIDTH as u32, OBSTACLE_HEIGHT as u32);

/// Clear `target` and draw platform, player and active obstacles.
pub fn draw_scene<D>(session: &Session, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    PLATFORM.into_styled(FILLED).draw(target)?;

    let player = session.player();
    Rectangle::new(Point::new(player.x, player.y), SPRITE)
        .into_styled(OUTLINE)
        .draw(target)?;

    for obstacle in session.obstacles().active() {
        Rectangle::new(Point::new(obstacle.x, OBSTACLE_Y), OBSTACLE)
            .into_styled(OUTLINE)
            .draw(target)?;
    }

    Ok(())
}

/// Draw the frame and push it to the panel.
pub fn render<P: Panel>(session: &Session, panel: &mut P) -> Result<(), P::Error> {
    draw_scene(session, panel)?;
    panel.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        GROUND_Y,
        PLAYER_START_X,
    };

    fn lit(fb: &Framebuffer, x: i32, y: i32) -> bool {
        fb.pixel(Point::new(x, y))
    }

    #[test]
    fn fresh_session() {
        let session = Session::new();
        let mut fb = Framebuffer::new();
        draw_scene(&session, &mut fb).unwrap();

        // Platform is solid across the bottom 8 rows.
        assert!(lit(&fb, 0, PLATFORM_Y));
        assert!(lit(&fb, 127, 63));
        assert!(!lit(&fb, 0, PLATFORM_Y - 1));

        // Player is an outline at the start position.
        assert!(lit(&fb, PLAYER_START_X, GROUND_Y));
        assert!(lit(&fb, PLAYER_START_X + 7, GROUND_Y + 7));
        assert!(!lit(&fb, PLAYER_START_X + 3, GROUND_Y + 3));

        // All obstacles spawn off-screen.
        let expected = 128 * 8 + 28;
        assert_eq!(fb.lit_count(), expected);
    }

    #[test]
    fn inactive_obstacles_are_not_drawn() {
        let mut session = Session::new();
        let mut fb = Framebuffer::new();
        for _ in 0..4 {
            session.tick(&Default::default(), |_| {});
        }
        // Slot 0 has scrolled to x = 120.
        draw_scene(&session, &mut fb).unwrap();
        assert!(lit(&fb, 120, OBSTACLE_Y));
        assert!(lit(&fb, 127, OBSTACLE_Y + 7));

        session.obstacles_mut().deactivate(0);
        draw_scene(&session, &mut fb).unwrap();
        assert!(!lit(&fb, 120, OBSTACLE_Y));
    }

    #[test]
    fn redraw_clears_previous_frame() {
        let mut session = Session::new();
        let mut fb = Framebuffer::new();
        draw_scene(&session, &mut fb).unwrap();
        session.player_mut().update_position(0);
        draw_scene(&session, &mut fb).unwrap();
        assert!(!lit(&fb, PLAYER_START_X, GROUND_Y));
        assert!(lit(&fb, 0, GROUND_Y));
    }
}
