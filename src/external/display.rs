use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::consts;
use crate::core::framebuffer::Framebuffer;

const OFF: Color = Color::RGB(0, 0, 0);
const ON: Color = Color::RGB(255, 255, 255);

/// Presents the framebuffer in a window, one scaled rectangle per pixel.
pub struct DisplayDriver {
    screen: Canvas<Window>,
    scale: u32,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = context.video()?;
        let window = video_subsystem
            .window(
                "CHIP-8",
                consts::DISPL_WIDTH as u32 * scale,
                consts::DISPL_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut screen = window
            .into_canvas()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;

        screen.set_draw_color(OFF);
        screen.clear();
        screen.present();

        Ok(DisplayDriver { screen, scale })
    }

    pub fn draw(&mut self, framebuffer: &Framebuffer) -> Result<(), String> {
        self.screen.set_draw_color(OFF);
        self.screen.clear();

        self.screen.set_draw_color(ON);
        for (y, row) in framebuffer.buffer.iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                if pixel == 0 {
                    continue;
                }
                self.screen.fill_rect(Rect::new(
                    (x as u32 * self.scale) as i32,
                    (y as u32 * self.scale) as i32,
                    self.scale,
                    self.scale,
                ))?;
            }
        }

        self.screen.present();
        Ok(())
    }
}
