use std::time::Instant;

use rayon::{prelude::*, ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::{
    error::ValidationError,
    frame::{Band, FrameBuffer},
    scene::Scene,
};

/// Validates `scene` and ray traces it into a new frame. The image is split
/// into `parallelism` horizontal bands rendered concurrently, one worker
/// thread per band.
pub fn render(scene: &Scene, parallelism: usize) -> Result<FrameBuffer, ValidationError> {
    scene.validate()?;

    let (width, height) = scene.view_frustum.image_size();
    let mut frame = FrameBuffer::new(width, height);

    if parallelism < 1 {
        warn!("parallelism {} clamped to 1", parallelism);
    } else if height > 0 && parallelism > height {
        warn!(
            "parallelism {} exceeds image height, using {} bands",
            parallelism, height
        );
    }

    let now = Instant::now();
    let bands = frame.bands_mut(parallelism);
    let band_count = bands.len();
    info!(
        "starting render with resolution {}x{} in {} bands",
        width, height, band_count
    );

    let fan_out = move || {
        bands
            .into_par_iter()
            .for_each(|band| render_band(scene, band));
    };
    match worker_pool(band_count) {
        Ok(pool) => pool.install(fan_out),
        Err(err) => {
            warn!("can not build a pool of {} threads: {}", band_count, err);
            fan_out()
        }
    }

    info!("took {}s", now.elapsed().as_secs_f32());
    Ok(frame)
}

/// Pool the bands of a single render run on.
fn worker_pool(threads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("band-{}", i))
        .build()
}

fn render_band(scene: &Scene, mut band: Band<'_>) {
    debug!(
        "rendering rows {:?} on a pool of {} threads",
        band.rows(),
        rayon::current_num_threads()
    );
    let frustum = &scene.view_frustum;
    let (width, _) = frustum.image_size();
    for y in band.rows() {
        for x in 0..width {
            let (px, py) = frustum.pixel_position(x, y);
            band.set_pixel(x, y, scene.render_pixel(px, py));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::{Color, Rgb8},
        geom::{Plane2d, Point, Point2d},
        scene::{tests::red_sphere_scene, Object},
        Sphere,
    };

    fn busy_scene() -> Scene {
        Scene {
            view_frustum: crate::camera::Frustum::new(
                Plane2d::new(Point2d::new(-20.0, 15.0), Point2d::new(20.0, -16.0), 0.0),
                Plane2d::new(Point2d::new(-30.0, 25.0), Point2d::new(30.0, -24.0), 50.0),
            ),
            light: Point::new(-15.0, 20.0, -30.0),
            objects: vec![
                Object::new(
                    Sphere::new(Point::new(0.0, 0.0, 30.0), 8.0),
                    Color::new(0.9, 0.2, 0.1),
                ),
                Object::new(
                    Sphere::new(Point::new(-6.0, 6.0, 15.0), 3.0),
                    Color::new(0.1, 0.8, 0.3),
                ),
                Object::new(
                    Sphere::new(Point::new(10.0, -8.0, 25.0), 5.0),
                    Color::new(0.2, 0.3, 1.0),
                ),
            ],
            bg: Color::new(0.3, 0.5, 0.7),
            kd: 0.7,
        }
    }

    #[test]
    fn image_matches_sphere_footprint() {
        let scene = red_sphere_scene();
        let frame = render(&scene, 1).unwrap();
        assert_eq!((frame.width(), frame.height()), (10, 10));

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let (px, py) = scene.view_frustum.pixel_position(x, y);
                let inside = (px - 7.0).powi(2) + (py - 5.0).powi(2) < 4.0;
                assert_eq!(
                    frame.get_pixel(x, y) != Color::BLACK.to_rgb8(),
                    inside,
                    "pixel {x},{y}"
                );
            }
        }
    }

    #[test]
    fn partitioning_does_not_change_the_image() {
        let scene = busy_scene();
        let reference = render(&scene, 1).unwrap();
        for parallelism in [2, 3, 4, 7, 64] {
            let frame = render(&scene, parallelism).unwrap();
            assert_eq!(frame.pixel_data(), reference.pixel_data(), "{parallelism}");
        }
    }

    #[test]
    fn remainder_rows_are_rendered() {
        let mut scene = busy_scene();
        scene.objects.clear();
        scene.bg = Color::WHITE;
        // 31 rows split in 4 bands
        let frame = render(&scene, 4).unwrap();
        assert_eq!(frame.height(), 31);
        assert!(frame.pixel_data().iter().all(|&c| c == 255));
    }

    #[test]
    fn one_worker_thread_per_band() {
        for threads in [1, 2, 5] {
            let pool = worker_pool(threads).unwrap();
            let seen: Vec<usize> = pool.install(|| {
                (0..threads)
                    .into_par_iter()
                    .map(|_| rayon::current_num_threads())
                    .collect()
            });
            assert!(seen.iter().all(|&n| n == threads), "{seen:?}");
            let name = pool.install(|| std::thread::current().name().map(String::from));
            assert!(name.is_some_and(|name| name.starts_with("band-")));
        }
    }

    #[test]
    fn zero_parallelism_is_clamped() {
        let scene = busy_scene();
        let frame = render(&scene, 0).unwrap();
        assert_eq!(frame.pixel_data(), render(&scene, 1).unwrap().pixel_data());
    }

    #[test]
    fn invalid_scene_is_not_rendered() {
        let mut scene = busy_scene();
        scene.objects[2].sphere.radius = -1.0;
        assert!(matches!(
            render(&scene, 4),
            Err(ValidationError::Object { index: 2, .. })
        ));

        let mut scene = busy_scene();
        scene.kd = 1.1;
        assert_eq!(
            render(&scene, 1).err(),
            Some(ValidationError::DiffuseCoefficient(1.1))
        );
    }
}
