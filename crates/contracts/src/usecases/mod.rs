pub mod u501_nasa_media;
